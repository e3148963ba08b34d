//! Skill-point budgets and their allocation.
//!
//! Every skill write in here goes through [`Investigator::set_skill`], so
//! language transfer fires for occupation and interest points alike.

use std::collections::{BTreeMap, BTreeSet};

use crate::aggregates::{Investigator, SkillWrite, SKILL_MAX};
use crate::entities::{Occupation, SkillTable, CREDIT_RATING, CTHULHU_MYTHOS};
use crate::value_objects::{
    Attribute, Attributes, OccupationSkillEntry, RandomSource, SkillLabel, SkillPool,
};

/// Random allocation never raises a skill past this.
pub const ALLOCATION_CEILING: i32 = 75;
/// Most points a single random draw can add.
pub const MAX_POINTS_PER_DRAW: i32 = 5;

/// Skills random picks never land on.
const NEVER_PICKED: [&str; 2] = [CTHULHU_MYTHOS, CREDIT_RATING];

// =============================================================================
// Budgets
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillBudgets {
    pub occupation: i32,
    pub interest: i32,
}

/// Occupation points from the occupation's formula; interest points are INT × 2.
pub fn compute_budgets(occupation: &Occupation, attributes: &Attributes) -> SkillBudgets {
    SkillBudgets {
        occupation: occupation.occupation_points(attributes),
        interest: attributes.get(Attribute::Intelligence) * 2,
    }
}

// =============================================================================
// Occupation skill list
// =============================================================================

/// Resolves placeholder entries into concrete skills, once per generation.
///
/// Fixed entries are claimed first so placeholders never resolve onto them;
/// the rest resolve in list order, each pick claiming its skill.
pub fn expand_occupation_skill_list(
    entries: &[OccupationSkillEntry],
    skills: &SkillTable,
    rng: &mut impl RandomSource,
) -> Vec<SkillLabel> {
    let mut claimed: BTreeSet<SkillLabel> = entries
        .iter()
        .filter_map(|entry| match entry {
            OccupationSkillEntry::Fixed(label) => Some(label.clone()),
            _ => None,
        })
        .collect();

    let mut resolved = Vec::new();
    let mut seen = BTreeSet::new();
    let mut push = |label: SkillLabel, resolved: &mut Vec<SkillLabel>| {
        if seen.insert(label.clone()) {
            resolved.push(label);
        }
    };

    for entry in entries {
        match entry {
            OccupationSkillEntry::Fixed(label) => push(label.clone(), &mut resolved),
            OccupationSkillEntry::AnySpecialization(main) => {
                if let Some(label) = pick_specialization(main, skills, &claimed, rng) {
                    claimed.insert(label.clone());
                    push(label, &mut resolved);
                }
            }
            OccupationSkillEntry::OneOf(options) => {
                let open: Vec<&SkillLabel> =
                    options.iter().filter(|o| !claimed.contains(*o)).collect();
                if let Some(label) = rng.choose(&open).map(|l| (*l).clone()) {
                    claimed.insert(label.clone());
                    push(label, &mut resolved);
                }
            }
            OccupationSkillEntry::ChooseAny(count) => {
                for _ in 0..*count {
                    let open = open_main_skills(skills, &claimed);
                    let Some(main) = rng.choose(&open).cloned() else {
                        break;
                    };
                    if let Some(label) = pick_specialization(&main, skills, &claimed, rng) {
                        claimed.insert(label.clone());
                        push(label, &mut resolved);
                    }
                }
            }
        }
    }
    resolved
}

/// A specialization of `main` nobody has claimed, or the plain skill when the
/// table lists no specializations for it.
fn pick_specialization(
    main: &str,
    skills: &SkillTable,
    claimed: &BTreeSet<SkillLabel>,
    rng: &mut impl RandomSource,
) -> Option<SkillLabel> {
    let specializations = skills.specializations_of(main);
    if specializations.is_empty() {
        let plain = SkillLabel::new(main);
        return (skills.contains(main) && !claimed.contains(&plain)).then_some(plain);
    }
    let open: Vec<SkillLabel> = specializations
        .iter()
        .map(|spec| SkillLabel::specialized(main, spec.as_str()))
        .filter(|label| !claimed.contains(label))
        .collect();
    rng.choose(&open).cloned()
}

/// Main skills that still have something unclaimed to offer.
fn open_main_skills(skills: &SkillTable, claimed: &BTreeSet<SkillLabel>) -> Vec<String> {
    skills
        .iter()
        .filter(|(name, _)| !NEVER_PICKED.contains(name))
        .filter(|(name, definition)| {
            if definition.has_specializations() {
                definition
                    .specializations
                    .iter()
                    .any(|spec| !claimed.contains(&SkillLabel::specialized(*name, spec.as_str())))
            } else {
                !claimed.contains(&SkillLabel::new(*name))
            }
        })
        .map(|(name, _)| name.to_string())
        .collect()
}

// =============================================================================
// Base values
// =============================================================================

/// Writes every non-specialized table skill at its base value.
pub fn initialize_base_skills(record: &mut Investigator, skills: &SkillTable) {
    let attributes = record.attributes().clone();
    for (name, definition) in skills.iter() {
        if definition.has_specializations() {
            continue;
        }
        let label = SkillLabel::new(name);
        let base = skills.base_value(&label, &attributes).unwrap_or(0);
        record.set_skill(label, base);
    }
}

/// Current value, or the table base when the skill was never written.
fn current_value(record: &Investigator, label: &SkillLabel, skills: &SkillTable) -> i32 {
    record
        .skill_value(label)
        .or_else(|| skills.base_value(label, record.attributes()))
        .unwrap_or(0)
}

// =============================================================================
// Random allocation
// =============================================================================

/// What one allocation run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocationSummary {
    pub pool: SkillPool,
    /// Points available when the run started.
    pub available: i32,
    pub spent: i32,
    pub draws: usize,
    /// Points added per skill.
    pub added: BTreeMap<SkillLabel, i32>,
    /// Candidates dropped because their main skill is not in the table.
    pub skipped: Vec<SkillLabel>,
}

impl AllocationSummary {
    /// Points left when no candidate had headroom. Legal, never an error.
    pub fn unspent(&self) -> i32 {
        self.available - self.spent
    }
}

/// Spends the remaining `pool` points at random across `candidates`.
///
/// Each draw picks a candidate uniformly, then adds a uniform
/// `1..=min(remaining, 75 - current, 5)`. Candidates leave the draw once they
/// reach 75. Stops when the budget is gone, no candidate has headroom, or
/// after twice the maximum possible number of draws.
pub fn allocate(
    record: &mut Investigator,
    pool: SkillPool,
    candidates: &[SkillLabel],
    skills: &SkillTable,
    rng: &mut impl RandomSource,
) -> AllocationSummary {
    let available = record.remaining(pool).max(0);
    let mut summary = AllocationSummary {
        pool,
        available,
        spent: 0,
        draws: 0,
        added: BTreeMap::new(),
        skipped: Vec::new(),
    };

    let mut active: Vec<SkillLabel> = Vec::new();
    for label in candidates {
        if !skills.knows(label) {
            summary.skipped.push(label.clone());
        } else if !active.contains(label) {
            active.push(label.clone());
        }
    }

    let guard = 2 * (usize::try_from(available).unwrap_or(0) + active.len());
    let mut iterations = 0;
    let mut remaining = available;

    while remaining > 0 && !active.is_empty() && iterations < guard {
        iterations += 1;
        let Some(index) = rng.choose_index(active.len()) else {
            break;
        };
        let label = active[index].clone();
        let current = current_value(record, &label, skills);
        let headroom = remaining
            .min(ALLOCATION_CEILING - current)
            .min(MAX_POINTS_PER_DRAW);
        if headroom <= 0 {
            active.remove(index);
            continue;
        }

        let points = rng.gen_range(1, headroom);
        if record.record_allocation(pool, points).is_err() {
            break;
        }
        record.set_skill(label.clone(), current + points);
        remaining -= points;
        summary.spent += points;
        summary.draws += 1;
        *summary.added.entry(label).or_insert(0) += points;

        if current + points >= ALLOCATION_CEILING {
            active.remove(index);
        }
    }

    summary
}

/// Picks 2-4 skills the occupation list does not claim and spends the
/// interest points on them.
pub fn allocate_interest(
    record: &mut Investigator,
    skills: &SkillTable,
    rng: &mut impl RandomSource,
) -> AllocationSummary {
    let mut claimed: BTreeSet<SkillLabel> = record.occupation_skills().iter().cloned().collect();
    let mut open = open_main_skills(skills, &claimed);
    let count = rng.gen_range(2, 4);

    let mut chosen = Vec::new();
    for _ in 0..count {
        let Some(index) = rng.choose_index(open.len()) else {
            break;
        };
        let main = open.remove(index);
        if let Some(label) = pick_specialization(&main, skills, &claimed, rng) {
            claimed.insert(label.clone());
            chosen.push(label);
        }
    }

    allocate(record, SkillPool::Interest, &chosen, skills, rng)
}

// =============================================================================
// Manual spending
// =============================================================================

/// Result of a manual spend. Rejections are normal outcomes, not errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpendOutcome {
    Applied(SkillWrite),
    Rejected { reason: String },
}

impl SpendOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, SpendOutcome::Applied(_))
    }
}

/// Spends `points` from `pool` on one skill.
pub fn spend_points(
    record: &mut Investigator,
    pool: SkillPool,
    label: SkillLabel,
    points: i32,
    skills: &SkillTable,
) -> SpendOutcome {
    let reject = |reason: String| SpendOutcome::Rejected { reason };

    if points <= 0 {
        return reject(format!("点数必须为正数: {points}"));
    }
    if !skills.knows(&label) {
        return reject(format!("未知技能: {label}"));
    }
    let remaining = record.remaining(pool);
    if points > remaining {
        return reject(format!("{pool}不足: 需要{points}, 剩余{remaining}"));
    }
    let current = current_value(record, &label, skills);
    if current + points > SKILL_MAX {
        return reject(format!("{label}将超过{SKILL_MAX}"));
    }
    if let Err(e) = record.record_allocation(pool, points) {
        return reject(e.to_string());
    }
    SpendOutcome::Applied(record.set_skill(label, current + points))
}

/// Returns every skill to its base value and zeroes both allocated counters.
pub fn reset_skill_points(record: &mut Investigator, skills: &SkillTable) {
    record.clear_skills();
    record.reset_allocations();
    initialize_base_skills(record, skills);
}
