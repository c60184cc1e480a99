/// A single edit operation in an alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditOp {
    Match,
    Substitute,
    /// A token of the target that has no counterpart in the source.
    Insert,
    /// A token of the source that has no counterpart in the target.
    Delete,
}

/// One step of an edit script, with the indices it consumes.
///
/// `source` indexes the first sequence and `target` the second. `Insert` has no
/// `source`, `Delete` has no `target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EditStep {
    pub op: EditOp,
    pub source: Option<usize>,
    pub target: Option<usize>,
}

/// A minimum-cost edit script turning one sequence into another, in order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Alignment {
    steps: Vec<EditStep>,
}

impl Alignment {
    pub fn steps(&self) -> &[EditStep] {
        &self.steps
    }

    /// Number of non-`Match` steps; equal to the Levenshtein distance.
    pub fn distance(&self) -> usize {
        self.steps.iter().filter(|s| s.op != EditOp::Match).count()
    }

    pub fn count(&self, op: EditOp) -> usize {
        self.steps.iter().filter(|s| s.op == op).count()
    }
}

/// Computes a minimum-cost edit script from `a` to `b`.
///
/// Builds the full `(n + 1) x (m + 1)` table, then walks it back from the
/// bottom-right corner. On ties the diagonal step (match or substitution) is
/// preferred, then deletion, then insertion.
///
/// # Examples
///
/// ```
/// use editscore::dynamic::{align, EditOp};
///
/// let a: Vec<char> = "flaw".chars().collect();
/// let b: Vec<char> = "lawn".chars().collect();
/// let alignment = align(&a, &b);
///
/// assert_eq!(alignment.distance(), 2);
/// assert_eq!(alignment.count(EditOp::Delete), 1);
/// assert_eq!(alignment.count(EditOp::Insert), 1);
/// ```
///
/// # Complexity
/// * Time: O(n·m)
/// * Space: O(n·m)
pub fn align<T: PartialEq>(a: &[T], b: &[T]) -> Alignment {
    let m = a.len();
    let n = b.len();

    let mut dp = vec![vec![0usize; n + 1]; m + 1];
    for (i, row) in dp.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in dp[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=m {
        for j in 1..=n {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            dp[i][j] = (dp[i][j - 1] + 1)
                .min(dp[i - 1][j] + 1)
                .min(dp[i - 1][j - 1] + cost);
        }
    }

    let mut i = m;
    let mut j = n;
    let mut steps = Vec::with_capacity(m.max(n));

    while i > 0 || j > 0 {
        if i > 0 && j > 0 {
            let same = a[i - 1] == b[j - 1];
            if dp[i][j] == dp[i - 1][j - 1] + usize::from(!same) {
                let op = if same { EditOp::Match } else { EditOp::Substitute };
                steps.push(EditStep {
                    op,
                    source: Some(i - 1),
                    target: Some(j - 1),
                });
                i -= 1;
                j -= 1;
                continue;
            }
        }
        if i > 0 && dp[i][j] == dp[i - 1][j] + 1 {
            steps.push(EditStep {
                op: EditOp::Delete,
                source: Some(i - 1),
                target: None,
            });
            i -= 1;
        } else {
            steps.push(EditStep {
                op: EditOp::Insert,
                source: None,
                target: Some(j - 1),
            });
            j -= 1;
        }
    }

    // Built back to front.
    steps.reverse();
    Alignment { steps }
}
