/// Iterates over every ordered selection of `k` distinct indices from `0..n`.
///
/// Selections are produced in lexicographic order, for example `n = 3, k = 2`
/// yields `[0, 1], [0, 2], [1, 0], [1, 2], [2, 0], [2, 1]`. Nothing is
/// yielded when `k` is zero or larger than `n`.
pub(super) struct Permutations {
    n: usize,
    indices: Vec<usize>,
    used: Vec<bool>,
    state: State,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum State {
    Fresh,
    Running,
    Done,
}

impl Permutations {
    pub(super) fn new(n: usize, k: usize) -> Self {
        let state = if k == 0 || k > n {
            State::Done
        } else {
            State::Fresh
        };

        let mut used = vec![false; n];
        let k = k.min(n);
        used[..k].fill(true);

        Self {
            n,
            indices: (0..k).collect(),
            used,
            state,
        }
    }

    /// Moves to the next selection, returning `false` once exhausted.
    fn advance(&mut self) -> bool {
        let k = self.indices.len();

        for position in (0..k).rev() {
            let current = self.indices[position];
            self.used[current] = false;

            let Some(next) = (current + 1..self.n).find(|&v| !self.used[v]) else {
                continue;
            };
            self.indices[position] = next;
            self.used[next] = true;

            // Refill the tail with the smallest free indices.
            let mut free = (0..self.n).filter(|&v| !self.used[v]);
            for slot in position + 1..k {
                let Some(v) = free.next() else {
                    return false;
                };
                self.indices[slot] = v;
            }
            for &v in &self.indices[position + 1..] {
                self.used[v] = true;
            }
            return true;
        }

        false
    }
}

impl Iterator for Permutations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.state {
            State::Done => return None,
            State::Fresh => self.state = State::Running,
            State::Running => {
                if !self.advance() {
                    self.state = State::Done;
                    return None;
                }
            }
        }
        Some(self.indices.clone())
    }
}

/// Returns `n!/(n-k)!`, or `None` if it overflows `usize`.
///
/// A `k` larger than `n` counts zero selections.
pub(super) fn permutation_count(n: usize, k: usize) -> Option<usize> {
    if k > n {
        return Some(0);
    }
    (n - k + 1..=n).try_fold(1_usize, usize::checked_mul)
}
