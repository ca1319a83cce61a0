//! Longest common subsequence via the classic dynamic programming table.
//!
//! * time: `O(NM)`
//! * space `O(NM)`

/// Flat `(before.len() + 1) × (after.len() + 1)` table where `get(i, j)` is
/// the LCS length of `before[..i]` and `after[..j]`.
#[derive(Debug, PartialEq, Eq)]
struct Table {
    width: usize,
    cells: Vec<u32>,
}

impl Table {
    fn build<T>(before: &[T], after: &[T]) -> Self
    where
        T: PartialEq,
    {
        let width = after.len() + 1;
        let mut table = Table {
            width,
            cells: vec![0; (before.len() + 1) * width],
        };

        for i in 1..=before.len() {
            for j in 1..=after.len() {
                let value = if before[i - 1] == after[j - 1] {
                    table.get(i - 1, j - 1) + 1
                } else {
                    table.get(i - 1, j).max(table.get(i, j - 1))
                };
                table.cells[i * width + j] = value;
            }
        }

        table
    }

    fn get(&self, i: usize, j: usize) -> u32 { self.cells[i * self.width + j] }
}

/// Returns the tokens of a longest common subsequence of `before` and
/// `after`, borrowed from `before`.
///
/// Backtracks from the bottom-right corner of the table. When both
/// neighbours hold the same length the walk moves up (dropping a `before`
/// token) rather than left, which makes the chosen subsequence deterministic.
pub fn longest_common_subsequence<'a, T>(before: &'a [T], after: &[T]) -> Vec<&'a T>
where
    T: PartialEq,
{
    let table = Table::build(before, after);

    let mut result = Vec::with_capacity(table.get(before.len(), after.len()) as usize);
    let (mut i, mut j) = (before.len(), after.len());
    while i > 0 && j > 0 {
        if before[i - 1] == after[j - 1] {
            result.push(&before[i - 1]);
            i -= 1;
            j -= 1;
        } else if table.get(i - 1, j) >= table.get(i, j - 1) {
            i -= 1;
        } else {
            j -= 1;
        }
    }

    result.reverse();
    result
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_table() {
        let table = Table::build(&[2, 3], &[0, 1, 2]);
        assert_eq!(
            table,
            Table {
                width: 4,
                cells: vec![
                    0, 0, 0, 0, //
                    0, 0, 0, 1, //
                    0, 0, 0, 1, //
                ],
            }
        );
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(longest_common_subsequence::<char>(&[], &[]), Vec::<&char>::new());
        assert_eq!(longest_common_subsequence(&['a'], &[]), Vec::<&char>::new());
        assert_eq!(longest_common_subsequence(&[], &['a']), Vec::<&char>::new());
    }

    #[test]
    fn test_examples() {
        let before: Vec<char> = "ABCBDAB".chars().collect();
        let after: Vec<char> = "BDCABA".chars().collect();
        let lcs: String = longest_common_subsequence(&before, &after).into_iter().collect();
        assert_eq!(lcs.len(), 4);

        let before = ["a", "b", "c"];
        let after = ["a", "x", "c"];
        assert_eq!(longest_common_subsequence(&before, &after), vec![&"a", &"c"]);
    }

    #[test]
    fn test_tie_break_prefers_dropping_before_tokens() {
        // Both "a" and "b" are LCSs of length one. Moving up on ties keeps the
        // match that is furthest to the right in `after`, which is "a".
        let lcs = longest_common_subsequence(&["a", "b"], &["b", "a"]);
        assert_eq!(lcs, vec![&"a"]);

        let lcs = longest_common_subsequence(&["b", "a"], &["a", "b"]);
        assert_eq!(lcs, vec![&"b"]);
    }
}
