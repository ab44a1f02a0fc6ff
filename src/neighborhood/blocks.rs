//! Critical blocks.
//!
//! A block is a maximal run of at least two consecutive critical-path
//! operations on the same machine. Consecutive critical operations on one
//! machine are linked by a machine arc (a job never visits a machine
//! twice), so a block is a contiguous slice of that machine's sequence.

use serde::{Deserialize, Serialize};

use crate::models::{Instance, MachineOrder, Operation};

/// A run of critical operations on one machine, identified by the
/// positions of its first and last operation in that machine's sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Block {
    /// Machine the block runs on.
    pub machine: usize,
    /// Position of the first operation.
    pub first: usize,
    /// Position of the last operation (`last > first`).
    pub last: usize,
}

#[allow(clippy::len_without_is_empty)] // a block never has fewer than two operations
impl Block {
    /// Creates a block.
    pub fn new(machine: usize, first: usize, last: usize) -> Self {
        debug_assert!(last > first, "a block holds at least two operations");
        Self {
            machine,
            first,
            last,
        }
    }

    /// Number of operations in the block.
    pub fn len(&self) -> usize {
        self.last - self.first + 1
    }
}

/// Decomposes a critical path into blocks, in path order.
pub fn blocks_of(instance: &Instance, order: &MachineOrder, path: &[Operation]) -> Vec<Block> {
    let mut blocks = Vec::new();
    let Some(&head) = path.first() else {
        return blocks;
    };

    let mut run_start = head;
    let mut run_machine = instance.machine_of(head);
    let mut run_len = 1;

    for &op in &path[1..] {
        let machine = instance.machine_of(op);
        if machine == run_machine {
            run_len += 1;
            continue;
        }
        close_run(order, run_machine, run_start, run_len, &mut blocks);
        run_start = op;
        run_machine = machine;
        run_len = 1;
    }
    close_run(order, run_machine, run_start, run_len, &mut blocks);

    blocks
}

fn close_run(
    order: &MachineOrder,
    machine: usize,
    first_op: Operation,
    len: usize,
    blocks: &mut Vec<Block>,
) {
    if len < 2 {
        return;
    }
    if let Some(first) = order.position_of(machine, first_op) {
        blocks.push(Block::new(machine, first, first + len - 1));
    }
}
