use std::fmt;

/// Outcome of a decoration pass.
///
/// `attempted` is false when the pass did nothing at all: every category was
/// disabled, a region filter excluded the system, or there were no anchors.
/// Per-prop creation failures are counted in `failed`; they never abort the pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecorationReport {
    pub attempted: bool,
    /// Anchors visited.
    pub anchors: usize,
    pub spawned: usize,
    pub failed: usize,
    /// Dedup hits: whole anchor-categories or single template slots skipped.
    pub duplicates_skipped: usize,
    /// A per-system cap stopped further spawns.
    pub cap_reached: bool,
}

impl DecorationReport {
    /// A pass that did nothing.
    pub fn skipped() -> Self {
        Self::default()
    }

    /// True when no prop failed to spawn.
    pub fn is_complete(&self) -> bool {
        self.failed == 0
    }

    /// Combine the reports of two passes over the same system.
    pub fn merge(self, other: Self) -> Self {
        Self {
            attempted: self.attempted || other.attempted,
            anchors: self.anchors + other.anchors,
            spawned: self.spawned + other.spawned,
            failed: self.failed + other.failed,
            duplicates_skipped: self.duplicates_skipped + other.duplicates_skipped,
            cap_reached: self.cap_reached || other.cap_reached,
        }
    }
}

impl fmt::Display for DecorationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.attempted {
            return write!(f, "nothing to do");
        }
        write!(
            f,
            "{} anchors, {} spawned, {} failed, {} duplicates skipped",
            self.anchors, self.spawned, self.failed, self.duplicates_skipped
        )?;
        if self.cap_reached {
            write!(f, " (cap reached)")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_adds_counts() {
        let gates = DecorationReport {
            attempted: true,
            anchors: 2,
            spawned: 3,
            failed: 1,
            duplicates_skipped: 1,
            cap_reached: false,
        };
        let belts = DecorationReport {
            attempted: true,
            anchors: 4,
            spawned: 2,
            cap_reached: true,
            ..DecorationReport::skipped()
        };

        let total = gates.merge(belts);
        assert_eq!(total.anchors, 6);
        assert_eq!(total.spawned, 5);
        assert!(total.cap_reached);
        assert!(!total.is_complete());
        assert_eq!(DecorationReport::skipped().merge(DecorationReport::skipped()), DecorationReport::skipped());
    }

    #[test]
    fn display_summarises() {
        assert_eq!(DecorationReport::skipped().to_string(), "nothing to do");
        let report = DecorationReport {
            attempted: true,
            anchors: 1,
            spawned: 8,
            cap_reached: true,
            ..Default::default()
        };
        assert_eq!(
            report.to_string(),
            "1 anchors, 8 spawned, 0 failed, 0 duplicates skipped (cap reached)"
        );
    }
}
