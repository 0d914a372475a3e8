use super::super::archetypes::{lookup, Archetype, ArchetypeKey, AxisCategory};
use super::super::domain::Coordinate;
use super::super::error::QuizError;

pub const SHORTLIST_LIMIT: usize = 6;

/// Categories matched by similarity: the user's own, widened to all three when balanced.
fn similar_categories(category: AxisCategory) -> Vec<AxisCategory> {
    match category {
        AxisCategory::Balanced => vec![
            AxisCategory::Balanced,
            AxisCategory::Low,
            AxisCategory::High,
        ],
        other => vec![other],
    }
}

/// Categories matched by complementarity: the opposite pole, or everything for a switch.
fn complementary_categories(category: AxisCategory) -> Vec<AxisCategory> {
    match category {
        AxisCategory::Balanced => AxisCategory::ALL.to_vec(),
        other => vec![other.opposite()],
    }
}

/// Up to six archetypes compatible with the user, in enumeration order
/// (X outer, Y middle, Z inner). Corner positions can yield fewer than six.
pub fn shortlist(user: &Coordinate) -> Result<Vec<&'static Archetype>, QuizError> {
    let user_key = ArchetypeKey::for_coordinate(user);
    let x_options = similar_categories(user_key.x);
    let y_options = complementary_categories(user_key.y);
    let z_options = similar_categories(user_key.z);

    let mut compatible: Vec<&'static Archetype> = Vec::with_capacity(SHORTLIST_LIMIT);
    for &x in &x_options {
        for &y in &y_options {
            for &z in &z_options {
                let archetype = lookup(ArchetypeKey::new(x, y, z))?;
                if !compatible.iter().any(|seen| seen.name == archetype.name) {
                    compatible.push(archetype);
                }
            }
        }
    }

    compatible.truncate(SHORTLIST_LIMIT);
    Ok(compatible)
}
