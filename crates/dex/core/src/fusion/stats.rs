//! Stat blending.
//!
//! Each stat leans 2:1 toward the contributor whose half owns it:
//!
//! ```text
//! head stat (Attack, Defense, Speed)                 = ⌊(2 × head + body) / 3⌋
//! body stat (HP, Special Attack, Special Defense)    = ⌊(2 × body + head) / 3⌋
//! ```
//!
//! Division truncates. Totals are never blended; they are recomputed from the
//! blended stats by [`BaseStats`].

use crate::record::{BaseStats, Field};

/// Blend the stats of a head contributor and a body contributor.
pub fn blend(head: &BaseStats, body: &BaseStats) -> BaseStats {
    let mut fused = BaseStats::default();
    for field in Field::HEAD_STATS {
        fused.set(field, weighted(stat(head, field), stat(body, field)));
    }
    for field in Field::BODY_STATS {
        fused.set(field, weighted(stat(body, field), stat(head, field)));
    }
    fused
}

/// ⌊(2 × major + minor) / 3⌋, widened so large inputs cannot overflow.
const fn weighted(major: u32, minor: u32) -> u32 {
    // The result never exceeds max(major, minor), so it fits back into u32.
    ((2 * major as u64 + minor as u64) / 3) as u32
}

fn stat(stats: &BaseStats, field: Field) -> u32 {
    stats.get(field).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn head_stats_favor_the_head() {
        let head = BaseStats::new(0, 100, 0, 0, 0, 0);
        let body = BaseStats::new(0, 50, 0, 0, 0, 0);
        // ⌊250 / 3⌋ = 83
        assert_eq!(blend(&head, &body).attack, 83);
    }

    #[test]
    fn body_stats_favor_the_body() {
        let head = BaseStats::new(10, 0, 0, 100, 0, 0);
        let body = BaseStats::new(80, 0, 0, 20, 0, 0);
        let fused = blend(&head, &body);
        // ⌊(160 + 10) / 3⌋ = 56, ⌊(40 + 100) / 3⌋ = 46
        assert_eq!(fused.hp, 56);
        assert_eq!(fused.special_attack, 46);
    }

    #[test]
    fn division_truncates_instead_of_rounding() {
        // (2 × 2 + 1) / 3 = 1.67
        let fused = blend(&BaseStats::new(1, 2, 2, 1, 1, 2), &BaseStats::new(2, 1, 1, 2, 2, 1));
        assert_eq!(fused, BaseStats::new(1, 1, 1, 1, 1, 1));
    }

    #[test]
    fn blending_with_itself_is_identity() {
        let stats = BaseStats::new(78, 84, 78, 109, 85, 100);
        assert_eq!(blend(&stats, &stats), stats);
    }

    #[test]
    fn large_values_do_not_overflow() {
        let max = BaseStats::new(u32::MAX, u32::MAX, u32::MAX, u32::MAX, u32::MAX, u32::MAX);
        assert_eq!(blend(&max, &max).attack, u32::MAX);
    }
}
