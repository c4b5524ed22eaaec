//! Move planning for the transfer procedure.
//!
//! [`SolutionPlan`] walks the classic recursion with an explicit work list,
//! so deep puzzles do not grow the call stack. It yields exactly the move
//! order of the recursive transfer.

use super::Tower;
use tracing::instrument;

/// Returns the optimal move count `2^n - 1`, or `None` if it overflows `u64`.
pub fn expected_moves(num_disks: usize) -> Option<u64> {
    match num_disks {
        0 => Some(0),
        1..=64 => Some(u64::MAX >> (64 - num_disks)),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy)]
enum Frame {
    Transfer {
        disks: usize,
        from: Tower,
        to: Tower,
        via: Tower,
    },
    Single {
        from: Tower,
        to: Tower,
    },
}

/// Iterator over the `(from, to)` moves that transfer a stack of disks.
#[derive(Debug, Clone)]
pub struct SolutionPlan {
    pending: Vec<Frame>,
}

impl SolutionPlan {
    /// Plans moving `disks` rings from `from` to `to` using `via` as auxiliary.
    #[instrument]
    pub fn new(disks: usize, from: Tower, to: Tower, via: Tower) -> Self {
        let mut pending = Vec::with_capacity(disks + 1);
        if disks > 0 {
            pending.push(Frame::Transfer {
                disks,
                from,
                to,
                via,
            });
        }
        Self { pending }
    }

    /// Plans the standard solve: first tower to third via the second.
    pub fn standard(disks: usize) -> Self {
        Self::new(disks, Tower::First, Tower::Third, Tower::Second)
    }
}

impl Iterator for SolutionPlan {
    type Item = (Tower, Tower);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(frame) = self.pending.pop() {
            match frame {
                Frame::Single { from, to } => return Some((from, to)),
                Frame::Transfer { disks: 1, from, to, .. } => return Some((from, to)),
                Frame::Transfer {
                    disks,
                    from,
                    to,
                    via,
                } => {
                    // Pushed in reverse of execution order
                    self.pending.push(Frame::Transfer {
                        disks: disks - 1,
                        from: via,
                        to,
                        via: from,
                    });
                    self.pending.push(Frame::Single { from, to });
                    self.pending.push(Frame::Transfer {
                        disks: disks - 1,
                        from,
                        to: via,
                        via: to,
                    });
                }
            }
        }
        None
    }
}
