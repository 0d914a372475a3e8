use super::{Archetype, ArchetypeKey, AxisCategory};

use super::AxisCategory::{Balanced, High, Low};

const fn entry(
    x: AxisCategory,
    y: AxisCategory,
    z: AxisCategory,
    name: &'static str,
    glyph: &'static str,
    description: &'static str,
) -> Archetype {
    Archetype {
        key: ArchetypeKey { x, y, z },
        name,
        glyph,
        description,
    }
}

/// One entry per category triple, ordered with X outermost and Z innermost.
pub(super) static CATALOG: [Archetype; 27] = [
    entry(
        Low,
        Low,
        Low,
        "The Noble Protector",
        "🔱",
        "Masculine, dominant energy with deep romantic connection. You lead with strength while valuing emotional intimacy and tender moments.",
    ),
    entry(
        Low,
        Low,
        Balanced,
        "The Balanced Warrior",
        "⚔️",
        "Masculine dominant presence balancing romance and passion. You protect and lead while appreciating both emotional depth and physical chemistry.",
    ),
    entry(
        Low,
        Low,
        High,
        "The Primal Dominant",
        "⚡",
        "Masculine, commanding presence driven by physical chemistry. You lead with confidence and intensity, valuing raw attraction and powerful connection.",
    ),
    entry(
        Low,
        Balanced,
        Low,
        "The Gentle Guardian",
        "🌙",
        "Masculine switch with romantic soul. You move fluidly between leading and following, always prioritizing emotional connection.",
    ),
    entry(
        Low,
        Balanced,
        Balanced,
        "The Versatile Masculine",
        "🎯",
        "Masculine energy with adaptable power dynamics. You balance all aspects of intimacy with confidence and flexibility.",
    ),
    entry(
        Low,
        Balanced,
        High,
        "The Passionate Masculine",
        "🔥",
        "Masculine switch driven by physical chemistry. You blend strength with adaptability, valuing intense physical connection.",
    ),
    entry(
        Low,
        High,
        Low,
        "The Devoted Romantic",
        "🌊",
        "Masculine submissive with romantic heart. You surrender with grace while maintaining masculine energy, valuing deep emotional bonds.",
    ),
    entry(
        Low,
        High,
        Balanced,
        "The Trusting Masculine",
        "💫",
        "Masculine submissive balancing connection styles. You yield with confidence, comfortable with both romance and passion.",
    ),
    entry(
        Low,
        High,
        High,
        "The Intense Surrender",
        "🌋",
        "Masculine submissive driven by physical desire. You surrender to intense chemistry while maintaining your masculine core.",
    ),
    entry(
        Balanced,
        Low,
        Low,
        "The Romantic Leader",
        "🦋",
        "Androgynous dominant with romantic soul. You lead from a place of balance, valuing emotional depth and authentic connection.",
    ),
    entry(
        Balanced,
        Low,
        Balanced,
        "The Sovereign Presence",
        "👑",
        "Balanced dominant energy comfortable with all forms of intimacy. You command respect while remaining open to both romance and passion.",
    ),
    entry(
        Balanced,
        Low,
        High,
        "The Dynamic Leader",
        "💥",
        "Androgynous dominant driven by chemistry. You lead with confidence and intensity, prioritizing physical connection.",
    ),
    entry(
        Balanced,
        Balanced,
        Low,
        "The Fluid Romantic",
        "🌸",
        "Complete balance with romantic heart. You flow between all energies with grace, always seeking emotional connection.",
    ),
    entry(
        Balanced,
        Balanced,
        Balanced,
        "The Harmonious Soul",
        "✨",
        "Perfect equilibrium across all dimensions. You embody complete balance and adaptability in all aspects of intimacy.",
    ),
    entry(
        Balanced,
        Balanced,
        High,
        "The Playful Switch",
        "🎭",
        "Balanced and versatile, driven by chemistry. You explore all dynamics with curiosity and passion.",
    ),
    entry(
        Balanced,
        High,
        Low,
        "The Tender Dreamer",
        "🌹",
        "Androgynous submissive romantic. You surrender with grace and sensitivity, valuing emotional intimacy above all.",
    ),
    entry(
        Balanced,
        High,
        Balanced,
        "The Graceful Yielder",
        "💎",
        "Balanced submissive comfortable with all connection styles. You yield with elegance and openness.",
    ),
    entry(
        Balanced,
        High,
        High,
        "The Sensual Surrender",
        "🔮",
        "Androgynous submissive driven by physical desire. You embrace intensity and chemistry in your surrender.",
    ),
    entry(
        High,
        Low,
        Low,
        "The Feminine Dominant",
        "🌺",
        "Feminine energy with commanding presence and romantic heart. You lead with grace and emotional intelligence.",
    ),
    entry(
        High,
        Low,
        Balanced,
        "The Commanding Feminine",
        "💃",
        "Feminine dominant balancing romance and passion. You take charge with elegance and confidence.",
    ),
    entry(
        High,
        Low,
        High,
        "The Fierce Goddess",
        "🔥",
        "Feminine dominant driven by chemistry. You command with sensual power and magnetic intensity.",
    ),
    entry(
        High,
        Balanced,
        Low,
        "The Romantic Feminine",
        "🦢",
        "Feminine switch with romantic soul. You flow between roles with grace, always prioritizing emotional depth.",
    ),
    entry(
        High,
        Balanced,
        Balanced,
        "The Balanced Feminine",
        "🌙",
        "Feminine energy with complete adaptability. You embrace all dynamics while maintaining your feminine essence.",
    ),
    entry(
        High,
        Balanced,
        High,
        "The Passionate Feminine",
        "💋",
        "Feminine switch driven by chemistry. You blend grace with intensity, valuing powerful physical connection.",
    ),
    entry(
        High,
        High,
        Low,
        "The Tender Soul",
        "🌷",
        "Feminine submissive romantic. You surrender with elegance and emotional depth, seeking profound connection.",
    ),
    entry(
        High,
        High,
        Balanced,
        "The Graceful Romantic",
        "💖",
        "Feminine submissive balancing connection styles. You yield with beauty and openness to all forms of intimacy.",
    ),
    entry(
        High,
        High,
        High,
        "The Sensual Flame",
        "🌶️",
        "Feminine submissive driven by passion. You surrender to intense chemistry with grace and desire.",
    ),
];
