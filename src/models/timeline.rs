//! Execution timeline (Gantt chart) model.
//!
//! A timeline is the ordered list of CPU slices a simulation granted.
//! Non-preemptive policies produce one slice per process; Round Robin
//! produces one slice per quantum.

use serde::{Deserialize, Serialize};

/// A contiguous interval during which one process held the CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slice {
    /// Process that ran.
    pub process_id: u32,
    /// Start tick (inclusive).
    pub start: u64,
    /// End tick (exclusive).
    pub end: u64,
    /// Ticks the process still owed after this slice.
    pub remaining_after: u64,
}

impl Slice {
    /// Creates a new slice.
    pub fn new(process_id: u32, start: u64, end: u64, remaining_after: u64) -> Self {
        Self {
            process_id,
            start,
            end,
            remaining_after,
        }
    }

    /// Slice length in ticks.
    #[inline]
    pub fn duration(&self) -> u64 {
        self.end - self.start
    }

    /// Whether the process finished at the end of this slice.
    #[inline]
    pub fn is_final(&self) -> bool {
        self.remaining_after == 0
    }
}

/// Ordered sequence of slices for one simulation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    /// Slices in execution order.
    pub slices: Vec<Slice>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a slice. Zero-length slices are ignored.
    pub fn push(&mut self, slice: Slice) {
        debug_assert!(
            self.slices.last().map_or(true, |last| last.end <= slice.start),
            "slices must not overlap"
        );
        if slice.end > slice.start {
            self.slices.push(slice);
        }
    }

    /// End of the last slice (0 if empty).
    pub fn makespan(&self) -> u64 {
        self.slices.last().map_or(0, |s| s.end)
    }

    /// Total ticks the CPU was busy.
    pub fn busy_ticks(&self) -> u64 {
        self.slices.iter().map(Slice::duration).sum()
    }

    /// Total ticks the CPU sat idle between t=0 and the makespan.
    pub fn idle_ticks(&self) -> u64 {
        self.makespan() - self.busy_ticks()
    }

    /// Number of times the CPU switched from one process to another.
    pub fn context_switches(&self) -> usize {
        self.slices
            .windows(2)
            .filter(|w| w[0].process_id != w[1].process_id)
            .count()
    }

    /// Whether slice starts never go backwards and slices never overlap.
    pub fn is_monotonic(&self) -> bool {
        self.slices
            .windows(2)
            .all(|w| w[0].start <= w[1].start && w[0].end <= w[1].start)
    }

    /// All slices for a given process.
    pub fn slices_for(&self, process_id: u32) -> Vec<&Slice> {
        self.slices
            .iter()
            .filter(|s| s.process_id == process_id)
            .collect()
    }

    /// Number of slices.
    pub fn len(&self) -> usize {
        self.slices.len()
    }

    /// Whether no slice was recorded.
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}
