//! Shortest-edit-script computation between two document snapshots.
//!
//! Aligns two texts over their `char` sequences with a Myers O(N·D) bisect,
//! cleans the resulting hunk script so contiguous changes surface as whole
//! word-level runs, and emits [`Edit`]s whose positions live in the
//! *evolving* document's coordinate space: an insert advances the cursor by
//! its own length, a delete leaves the cursor where the deleted span began.
//! Downstream operational-transform consumers depend on exactly this
//! position semantics.

use crate::edit::Edit;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tag {
    Delete,
    Equal,
    Insert,
}

/// A maximal run of chars sharing one tag.
type Hunk = (Tag, Vec<char>);
type Script = Vec<Hunk>;

/// Compute the ordered edit sequence transforming `previous` into `current`.
///
/// The returned edits applied sequentially (see [`crate::edit::apply`])
/// reproduce `current` exactly; identical inputs yield an empty sequence.
/// Total over any two finite texts.
pub fn diff(previous: &str, current: &str) -> Vec<Edit> {
    if previous == current {
        return Vec::new();
    }
    let src: Vec<char> = previous.chars().collect();
    let dst: Vec<char> = current.chars().collect();
    let mut script = diff_slices(&src, &dst);
    cleanup_semantic(&mut script);
    emit(script)
}

/// Walk the cleaned hunks with a single cursor and collect the edits.
fn emit(script: Script) -> Vec<Edit> {
    let mut edits = Vec::new();
    let mut cursor = 0usize;
    for (tag, run) in script {
        match tag {
            Tag::Equal => cursor += run.len(),
            Tag::Insert => {
                let len = run.len();
                edits.push(Edit::insert(String::from_iter(run), cursor));
                // The inserted span now occupies the evolving document.
                cursor += len;
            }
            // The deleted span collapses; whatever follows sits at the same
            // offset the deletion started at.
            Tag::Delete => edits.push(Edit::delete(String::from_iter(run), cursor)),
        }
    }
    edits
}

// ── Alignment ─────────────────────────────────────────────────────────────

fn diff_slices(src: &[char], dst: &[char]) -> Script {
    if src == dst {
        if src.is_empty() {
            return Vec::new();
        }
        return vec![(Tag::Equal, src.to_vec())];
    }

    let prefix_len = common_prefix(src, dst);
    let suffix_len = common_suffix(&src[prefix_len..], &dst[prefix_len..]);
    let prefix = &src[..prefix_len];
    let suffix = &src[src.len() - suffix_len..];

    let core_src = &src[prefix_len..src.len() - suffix_len];
    let core_dst = &dst[prefix_len..dst.len() - suffix_len];
    let mut script = diff_core(core_src, core_dst);

    if !prefix.is_empty() {
        script.insert(0, (Tag::Equal, prefix.to_vec()));
    }
    if !suffix.is_empty() {
        script.push((Tag::Equal, suffix.to_vec()));
    }
    cleanup_merge(&mut script);
    script
}

/// Diff two slices that share no common prefix or suffix.
fn diff_core(src: &[char], dst: &[char]) -> Script {
    if src.is_empty() {
        return vec![(Tag::Insert, dst.to_vec())];
    }
    if dst.is_empty() {
        return vec![(Tag::Delete, src.to_vec())];
    }

    let (long, short, src_is_long) = if src.len() > dst.len() {
        (src, dst, true)
    } else {
        (dst, src, false)
    };

    // Shorter text fully contained in the longer one.
    if let Some(at) = find_subslice(long, short) {
        let tag = if src_is_long { Tag::Delete } else { Tag::Insert };
        let mut script = Vec::with_capacity(3);
        if at > 0 {
            script.push((tag, long[..at].to_vec()));
        }
        script.push((Tag::Equal, short.to_vec()));
        if at + short.len() < long.len() {
            script.push((tag, long[at + short.len()..].to_vec()));
        }
        return script;
    }

    // A single char that is not contained above cannot match anything.
    if short.len() == 1 {
        return vec![(Tag::Delete, src.to_vec()), (Tag::Insert, dst.to_vec())];
    }

    bisect(src, dst)
}

/// Myers bisect: find the middle snake where the forward and reverse D-paths
/// overlap, then diff the two halves recursively. Linear space.
fn bisect(src: &[char], dst: &[char]) -> Script {
    let n = src.len() as isize;
    let m = dst.len() as isize;
    let max_d = (src.len() + dst.len()).div_ceil(2) as isize;
    let v_offset = max_d;
    // One extra slot keeps the `offset + 1` accesses in bounds.
    let v_len = (2 * max_d + 2) as usize;
    let mut v1 = vec![-1isize; v_len];
    let mut v2 = vec![-1isize; v_len];
    v1[(v_offset + 1) as usize] = 0;
    v2[(v_offset + 1) as usize] = 0;

    let delta = n - m;
    // With an odd delta the paths can only overlap on the forward sweep.
    let front = delta % 2 != 0;
    let mut k1_start = 0isize;
    let mut k1_end = 0isize;
    let mut k2_start = 0isize;
    let mut k2_end = 0isize;

    for d in 0..max_d {
        let mut k1 = -d + k1_start;
        while k1 <= d - k1_end {
            let k1_offset = (v_offset + k1) as usize;
            let mut x1 = if k1 == -d || (k1 != d && v1[k1_offset - 1] < v1[k1_offset + 1]) {
                v1[k1_offset + 1]
            } else {
                v1[k1_offset - 1] + 1
            };
            let mut y1 = x1 - k1;
            while x1 < n && y1 < m && src[x1 as usize] == dst[y1 as usize] {
                x1 += 1;
                y1 += 1;
            }
            v1[k1_offset] = x1;
            if x1 > n {
                k1_end += 2;
            } else if y1 > m {
                k1_start += 2;
            } else if front {
                let k2_offset = v_offset + delta - k1;
                if (0..v_len as isize).contains(&k2_offset) && v2[k2_offset as usize] != -1 {
                    let x2 = n - v2[k2_offset as usize];
                    if x1 >= x2 {
                        return bisect_split(src, dst, x1 as usize, y1 as usize);
                    }
                }
            }
            k1 += 2;
        }

        let mut k2 = -d + k2_start;
        while k2 <= d - k2_end {
            let k2_offset = (v_offset + k2) as usize;
            let mut x2 = if k2 == -d || (k2 != d && v2[k2_offset - 1] < v2[k2_offset + 1]) {
                v2[k2_offset + 1]
            } else {
                v2[k2_offset - 1] + 1
            };
            let mut y2 = x2 - k2;
            while x2 < n && y2 < m && src[(n - x2 - 1) as usize] == dst[(m - y2 - 1) as usize] {
                x2 += 1;
                y2 += 1;
            }
            v2[k2_offset] = x2;
            if x2 > n {
                k2_end += 2;
            } else if y2 > m {
                k2_start += 2;
            } else if !front {
                let k1_offset = v_offset + delta - k2;
                if (0..v_len as isize).contains(&k1_offset) && v1[k1_offset as usize] != -1 {
                    let x1 = v1[k1_offset as usize];
                    let y1 = v_offset + x1 - k1_offset;
                    if x1 >= n - x2 {
                        return bisect_split(src, dst, x1 as usize, y1 as usize);
                    }
                }
            }
            k2 += 2;
        }
    }

    // No commonality at all.
    vec![(Tag::Delete, src.to_vec()), (Tag::Insert, dst.to_vec())]
}

fn bisect_split(src: &[char], dst: &[char], x: usize, y: usize) -> Script {
    let mut script = diff_slices(&src[..x], &dst[..y]);
    script.extend(diff_slices(&src[x..], &dst[y..]));
    script
}

// ── Script cleanup ────────────────────────────────────────────────────────

/// Coalesce adjacent same-tag hunks into maximal runs and factor common
/// prefixes/suffixes out of paired delete+insert runs. Repeats whenever the
/// sideways-shift pass frees up further merges.
fn cleanup_merge(script: &mut Script) {
    loop {
        // Sentinel equality so the final run of edits gets flushed too.
        script.push((Tag::Equal, Vec::new()));
        let mut pointer = 0usize;
        let mut del_count = 0usize;
        let mut ins_count = 0usize;
        let mut del_text: Vec<char> = Vec::new();
        let mut ins_text: Vec<char> = Vec::new();

        while pointer < script.len() {
            if pointer < script.len() - 1 && script[pointer].1.is_empty() {
                script.remove(pointer);
                continue;
            }
            match script[pointer].0 {
                Tag::Insert => {
                    ins_count += 1;
                    ins_text.extend_from_slice(&script[pointer].1);
                    pointer += 1;
                }
                Tag::Delete => {
                    del_count += 1;
                    del_text.extend_from_slice(&script[pointer].1);
                    pointer += 1;
                }
                Tag::Equal => {
                    if del_count + ins_count > 1 {
                        if del_count != 0 && ins_count != 0 {
                            let prefix = common_prefix(&ins_text, &del_text);
                            if prefix != 0 {
                                let first_edit = pointer - del_count - ins_count;
                                if first_edit > 0 && script[first_edit - 1].0 == Tag::Equal {
                                    let run = ins_text[..prefix].to_vec();
                                    script[first_edit - 1].1.extend(run);
                                } else {
                                    script.insert(0, (Tag::Equal, ins_text[..prefix].to_vec()));
                                    pointer += 1;
                                }
                                ins_text.drain(..prefix);
                                del_text.drain(..prefix);
                            }
                            let suffix = common_suffix(&ins_text, &del_text);
                            if suffix != 0 {
                                let mut run = ins_text[ins_text.len() - suffix..].to_vec();
                                run.extend_from_slice(&script[pointer].1);
                                script[pointer].1 = run;
                                ins_text.truncate(ins_text.len() - suffix);
                                del_text.truncate(del_text.len() - suffix);
                            }
                        }
                        let first_edit = pointer - del_count - ins_count;
                        let mut merged: Script = Vec::with_capacity(2);
                        if !del_text.is_empty() {
                            merged.push((Tag::Delete, std::mem::take(&mut del_text)));
                        }
                        if !ins_text.is_empty() {
                            merged.push((Tag::Insert, std::mem::take(&mut ins_text)));
                        }
                        let merged_len = merged.len();
                        script.splice(first_edit..pointer, merged);
                        pointer = first_edit + merged_len + 1;
                    } else if pointer != 0 && script[pointer - 1].0 == Tag::Equal {
                        let (_, run) = script.remove(pointer);
                        script[pointer - 1].1.extend(run);
                    } else {
                        pointer += 1;
                    }
                    del_count = 0;
                    ins_count = 0;
                    del_text.clear();
                    ins_text.clear();
                }
            }
        }
        if script.last().is_some_and(|(_, run)| run.is_empty()) {
            script.pop();
        }

        // A single edit surrounded by equalities can sometimes be shifted
        // sideways to eliminate one of the equalities.
        let mut changed = false;
        let mut at = 1usize;
        while at + 1 < script.len() {
            if script[at - 1].0 == Tag::Equal && script[at + 1].0 == Tag::Equal {
                let prev = script[at - 1].1.clone();
                let next = script[at + 1].1.clone();
                if script[at].1.ends_with(&prev) {
                    let edit = &script[at].1;
                    let mut shifted = prev.clone();
                    shifted.extend_from_slice(&edit[..edit.len() - prev.len()]);
                    script[at].1 = shifted;
                    let mut grown = prev;
                    grown.extend_from_slice(&next);
                    script[at + 1].1 = grown;
                    script.remove(at - 1);
                    changed = true;
                } else if script[at].1.starts_with(&next) {
                    script[at - 1].1.extend_from_slice(&next);
                    let edit = &script[at].1;
                    let mut shifted = edit[next.len()..].to_vec();
                    shifted.extend_from_slice(&next);
                    script[at].1 = shifted;
                    script.remove(at + 1);
                    changed = true;
                }
            }
            at += 1;
        }
        if !changed {
            break;
        }
    }
}

/// Drop short equalities dominated by the edits around them so a replaced
/// word emits one delete and one insert rather than a char-level
/// interleaving, then align edit boundaries and reclaim overlaps.
fn cleanup_semantic(script: &mut Script) {
    let mut changed = false;
    // Indices of equalities that may still be dropped.
    let mut equalities: Vec<usize> = Vec::new();
    let mut last_equality: Option<Vec<char>> = None;
    let mut pointer: isize = 0;
    // Edit sizes before and after the candidate equality.
    let mut ins_before = 0usize;
    let mut del_before = 0usize;
    let mut ins_after = 0usize;
    let mut del_after = 0usize;

    while pointer < script.len() as isize {
        let idx = pointer as usize;
        if script[idx].0 == Tag::Equal {
            equalities.push(idx);
            ins_before = ins_after;
            del_before = del_after;
            ins_after = 0;
            del_after = 0;
            last_equality = Some(script[idx].1.clone());
        } else {
            if script[idx].0 == Tag::Insert {
                ins_after += script[idx].1.len();
            } else {
                del_after += script[idx].1.len();
            }
            let dominated = last_equality.as_ref().is_some_and(|eq| {
                eq.len() <= ins_before.max(del_before) && eq.len() <= ins_after.max(del_after)
            });
            if dominated {
                let eq = last_equality.take().unwrap_or_default();
                let at = *equalities.last().unwrap_or(&0);
                // Turn the equality into a delete + insert pair.
                script.insert(at, (Tag::Delete, eq));
                script[at + 1].0 = Tag::Insert;
                equalities.pop();
                equalities.pop();
                pointer = equalities.last().map_or(-1, |&i| i as isize);
                ins_before = 0;
                del_before = 0;
                ins_after = 0;
                del_after = 0;
                changed = true;
            }
        }
        pointer += 1;
    }
    if changed {
        cleanup_merge(script);
    }
    cleanup_semantic_lossless(script);

    // Reclaim overlaps between adjacent delete/insert pairs:
    // del(abcxxx) ins(xxxdef) → del(abc) eq(xxx) ins(def).
    let mut at = 1usize;
    while at < script.len() {
        if script[at - 1].0 == Tag::Delete && script[at].0 == Tag::Insert {
            let deletion = script[at - 1].1.clone();
            let insertion = script[at].1.clone();
            let overlap1 = common_overlap(&deletion, &insertion);
            let overlap2 = common_overlap(&insertion, &deletion);
            if overlap1 >= overlap2 {
                if overlap1 * 2 >= deletion.len() || overlap1 * 2 >= insertion.len() {
                    script.insert(at, (Tag::Equal, insertion[..overlap1].to_vec()));
                    script[at - 1].1 = deletion[..deletion.len() - overlap1].to_vec();
                    script[at + 1].1 = insertion[overlap1..].to_vec();
                    at += 1;
                }
            } else if overlap2 * 2 >= deletion.len() || overlap2 * 2 >= insertion.len() {
                // Reverse overlap: the end of the insertion re-creates the
                // start of the deletion.
                script.insert(at, (Tag::Equal, deletion[..overlap2].to_vec()));
                script[at - 1] = (Tag::Insert, insertion[..insertion.len() - overlap2].to_vec());
                script[at + 1] = (Tag::Delete, deletion[overlap2..].to_vec());
                at += 1;
            }
            at += 1;
        }
        at += 1;
    }
}

/// Slide edits that are surrounded by equalities to line their boundaries up
/// with word, sentence, or line breaks where the alignment is ambiguous.
fn cleanup_semantic_lossless(script: &mut Script) {
    let mut pointer = 1usize;
    while pointer + 1 < script.len() {
        if script[pointer - 1].0 == Tag::Equal && script[pointer + 1].0 == Tag::Equal {
            let mut equality1 = script[pointer - 1].1.clone();
            let mut edit = script[pointer].1.clone();
            let mut equality2 = script[pointer + 1].1.clone();

            // First shift the edit as far left as it will go.
            let offset = common_suffix(&equality1, &edit);
            if offset != 0 {
                let common: Vec<char> = edit[edit.len() - offset..].to_vec();
                equality1.truncate(equality1.len() - offset);
                let mut shifted = common.clone();
                shifted.extend_from_slice(&edit[..edit.len() - offset]);
                edit = shifted;
                let mut grown = common;
                grown.extend_from_slice(&equality2);
                equality2 = grown;
            }

            // Then step right one char at a time, keeping the best-scoring
            // boundary seen.
            let mut best_equality1 = equality1.clone();
            let mut best_edit = edit.clone();
            let mut best_equality2 = equality2.clone();
            let mut best_score =
                boundary_score(&equality1, &edit) + boundary_score(&edit, &equality2);
            while !edit.is_empty() && !equality2.is_empty() && edit[0] == equality2[0] {
                equality1.push(edit[0]);
                edit.remove(0);
                edit.push(equality2[0]);
                equality2.remove(0);
                let score = boundary_score(&equality1, &edit) + boundary_score(&edit, &equality2);
                // >= favours the rightmost of equal-scoring positions.
                if score >= best_score {
                    best_score = score;
                    best_equality1 = equality1.clone();
                    best_edit = edit.clone();
                    best_equality2 = equality2.clone();
                }
            }

            if script[pointer - 1].1 != best_equality1 {
                if best_equality1.is_empty() {
                    script.remove(pointer - 1);
                    pointer -= 1;
                } else {
                    script[pointer - 1].1 = best_equality1;
                }
                script[pointer].1 = best_edit;
                if best_equality2.is_empty() {
                    script.remove(pointer + 1);
                    pointer -= 1;
                } else {
                    script[pointer + 1].1 = best_equality2;
                }
            }
        }
        pointer += 1;
    }
}

/// Score how natural a boundary between two runs is: 6 for an edge, 5 for a
/// blank line, 4 for a line break, 3 for sentence end, 2 for whitespace,
/// 1 for other non-alphanumerics, 0 inside a word.
fn boundary_score(one: &[char], two: &[char]) -> u32 {
    if one.is_empty() || two.is_empty() {
        return 6;
    }
    let last = one[one.len() - 1];
    let first = two[0];
    let non_alnum1 = !last.is_alphanumeric();
    let non_alnum2 = !first.is_alphanumeric();
    let ws1 = non_alnum1 && last.is_whitespace();
    let ws2 = non_alnum2 && first.is_whitespace();
    let lb1 = ws1 && (last == '\n' || last == '\r');
    let lb2 = ws2 && (first == '\n' || first == '\r');

    if (lb1 && ends_blank_line(one)) || (lb2 && starts_blank_line(two)) {
        5
    } else if lb1 || lb2 {
        4
    } else if non_alnum1 && !ws1 && ws2 {
        3
    } else if ws1 || ws2 {
        2
    } else if non_alnum1 || non_alnum2 {
        1
    } else {
        0
    }
}

fn ends_blank_line(run: &[char]) -> bool {
    let Some(rest) = run.strip_suffix(&['\n'] as &[char]) else {
        return false;
    };
    let rest = rest.strip_suffix(&['\r'] as &[char]).unwrap_or(rest);
    rest.last() == Some(&'\n')
}

fn starts_blank_line(run: &[char]) -> bool {
    let rest = run.strip_prefix(&['\r'] as &[char]).unwrap_or(run);
    let Some(rest) = rest.strip_prefix(&['\n'] as &[char]) else {
        return false;
    };
    let rest = rest.strip_prefix(&['\r'] as &[char]).unwrap_or(rest);
    rest.first() == Some(&'\n')
}

// ── Slice helpers ─────────────────────────────────────────────────────────

fn common_prefix(a: &[char], b: &[char]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}

fn common_suffix(a: &[char], b: &[char]) -> usize {
    a.iter()
        .rev()
        .zip(b.iter().rev())
        .take_while(|(x, y)| x == y)
        .count()
}

fn find_subslice(haystack: &[char], needle: &[char]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    if needle.len() > haystack.len() {
        return None;
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}

/// Length of the longest suffix of `a` that is a prefix of `b`.
fn common_overlap(a: &[char], b: &[char]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }
    let a = if a.len() > b.len() { &a[a.len() - b.len()..] } else { a };
    let b = if b.len() > a.len() { &b[..a.len()] } else { b };
    let min = a.len();
    if a == b {
        return min;
    }

    let mut best = 0usize;
    let mut length = 1usize;
    loop {
        if length > min {
            return best;
        }
        let pattern = &a[min - length..];
        let Some(found) = find_subslice(b, pattern) else {
            return best;
        };
        length += found;
        if found == 0 || a[min - length..] == b[..length] {
            best = length;
            length += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edit::{apply, Edit};

    #[test]
    fn identical_texts_yield_nothing() {
        assert_eq!(diff("", ""), vec![]);
        assert_eq!(diff("hello", "hello"), vec![]);
    }

    #[test]
    fn insert_into_text() {
        assert_eq!(
            diff("hello world", "hello beautiful world"),
            vec![Edit::insert("beautiful ", 6)]
        );
    }

    #[test]
    fn delete_from_text() {
        assert_eq!(
            diff("hello beautiful world", "hello world"),
            vec![Edit::delete("beautiful ", 6)]
        );
    }

    #[test]
    fn later_inserts_shift_by_earlier_inserts() {
        assert_eq!(
            diff(
                "the boy played with the ball",
                "the tall boy played with the red ball"
            ),
            vec![Edit::insert("tall ", 4), Edit::insert("red ", 29)]
        );
    }

    #[test]
    fn later_deletes_do_not_shift_by_earlier_deletes() {
        assert_eq!(
            diff(
                "the tall boy played with the red ball",
                "the boy played with the ball"
            ),
            vec![Edit::delete("tall ", 4), Edit::delete("red ", 24)]
        );
    }

    #[test]
    fn replacement_emits_delete_then_insert() {
        let edits = diff("nice day", "sour night");
        assert!(edits
            .windows(2)
            .all(|pair| pair[0].position <= pair[1].position));
        assert_eq!(apply("nice day", &edits).unwrap(), "sour night");
    }

    #[test]
    fn whole_text_replaced() {
        let edits = diff("abc", "xyz");
        assert_eq!(edits, vec![Edit::delete("abc", 0), Edit::insert("xyz", 0)]);
    }

    #[test]
    fn append_and_prepend() {
        assert_eq!(diff("b", "ab"), vec![Edit::insert("a", 0)]);
        assert_eq!(diff("a", "ab"), vec![Edit::insert("b", 1)]);
        assert_eq!(diff("", "ab"), vec![Edit::insert("ab", 0)]);
        assert_eq!(diff("ab", ""), vec![Edit::delete("ab", 0)]);
    }

    #[test]
    fn non_ascii_content_survives_exactly() {
        let edits = diff("grüße", "grüßen");
        assert_eq!(edits, vec![Edit::insert("n", 5)]);
        let edits = diff("ławskiej", "Åawskiej");
        assert_eq!(apply("ławskiej", &edits).unwrap(), "Åawskiej");
    }

    #[test]
    fn round_trips_structured_text() {
        let cases = [
            ("", "a"),
            ("a", ""),
            ("aaa", "aba"),
            ("the quick brown fox", "the quick red fox jumps"),
            ("line one\nline two\n", "line one\nline 2\nline three\n"),
            ("xxxabc", "defxxx"),
            ("mañana", "manana"),
            ("ab\u{1F600}cd", "ab\u{1F601}cd"),
        ];
        for (before, after) in cases {
            let edits = diff(before, after);
            assert_eq!(apply(before, &edits).unwrap(), after, "{before:?} -> {after:?}");
        }
    }

    #[test]
    fn repeated_calls_are_deterministic() {
        let before = "the tall boy played with the red ball";
        let after = "a boy kicked the blue ball";
        assert_eq!(diff(before, after), diff(before, after));
    }

    #[test]
    fn positions_are_valid_in_the_evolving_document() {
        let before = "alpha beta gamma delta";
        let after = "beta gamma omega delta epsilon";
        let edits = diff(before, after);
        // apply() bounds-checks every edit against the evolving document.
        assert_eq!(apply(before, &edits).unwrap(), after);
    }

    #[test]
    fn overlap_helper_finds_suffix_prefix_runs() {
        let a: Vec<char> = "abcxxx".chars().collect();
        let b: Vec<char> = "xxxdef".chars().collect();
        assert_eq!(common_overlap(&a, &b), 3);
        let a: Vec<char> = "fi".chars().collect();
        let b: Vec<char> = "i".chars().collect();
        assert_eq!(common_overlap(&a, &b), 1);
        let a: Vec<char> = "abc".chars().collect();
        assert_eq!(common_overlap(&a, &a), 3);
    }

    #[test]
    fn large_documents_stay_tractable() {
        let before: String = "entry{key,\n  field = {value},\n}\n".repeat(800);
        let mut after = before.clone();
        after.push_str("entry{tail,\n  field = {last},\n}\n");
        let edits = diff(&before, &after);
        assert_eq!(apply(&before, &edits).unwrap(), after);
        assert_eq!(edits.len(), 1);
    }
}
