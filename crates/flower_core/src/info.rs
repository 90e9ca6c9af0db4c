//! Baked-in reference text for the recognizable flower categories.

/// Long-form reference text for one flower category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowerInfo {
    pub description: &'static str,
    pub care: &'static str,
}

/// Category identifiers the endpoint is expected to return, lowercase.
pub const KNOWN_CLASSES: [&str; 5] = ["daisy", "dandelion", "rose", "sunflower", "tulip"];

const DAISY: FlowerInfo = FlowerInfo {
    description: "Daisies are composite flowers with white petals radiating around a yellow \
                  center disc. They bloom from early spring into autumn and are among the most \
                  widespread wildflowers in temperate regions.",
    care: "Plant in full sun and well-drained soil. Water moderately and deadhead spent blooms \
           to encourage repeat flowering. Divide clumps every two to three years.",
};

const DANDELION: FlowerInfo = FlowerInfo {
    description: "Dandelions carry bright yellow flower heads that mature into spherical seed \
                  puffs. Every part of the plant is edible, and the deep taproot lets it thrive \
                  in lawns, cracks, and meadows alike.",
    care: "Needs no cultivation to speak of: any soil and some sun will do. If grown \
           deliberately for salads or tea, keep the soil loose so the taproot can be lifted \
           whole.",
};

const ROSE: FlowerInfo = FlowerInfo {
    description: "Roses are woody perennials with layered, fragrant blooms in nearly every \
                  color. Cultivated for thousands of years, they range from compact patio \
                  varieties to climbers covering whole walls.",
    care: "Give at least six hours of direct sun and rich, well-drained soil. Water deeply at \
           the base, mulch to retain moisture, and prune in late winter to an outward-facing \
           bud.",
};

const SUNFLOWER: FlowerInfo = FlowerInfo {
    description: "Sunflowers produce large flower heads ringed with golden petals on stems that \
                  can exceed three meters. Young heads track the sun across the sky until the \
                  stem stiffens at maturity.",
    care: "Sow directly in full sun after the last frost. Water generously while establishing, \
           and stake tall varieties against wind. Leave seed heads standing for the birds.",
};

const TULIP: FlowerInfo = FlowerInfo {
    description: "Tulips are spring bulbs with cup-shaped blooms held singly on upright stems. \
                  Centuries of breeding have produced thousands of varieties, from solid \
                  saturated colors to striped and fringed forms.",
    care: "Plant bulbs in autumn, pointed end up, about three times their depth in well-drained \
           soil. Let the foliage die back naturally after bloom so the bulb can recharge.",
};

/// Looks up the reference text for a category identifier.
///
/// The identifier comes from the network and is treated as an open string;
/// anything outside the known set yields `None` and the caller renders a
/// reduced card instead of failing.
pub fn flower_info(class: &str) -> Option<&'static FlowerInfo> {
    match class {
        "daisy" => Some(&DAISY),
        "dandelion" => Some(&DANDELION),
        "rose" => Some(&ROSE),
        "sunflower" => Some(&SUNFLOWER),
        "tulip" => Some(&TULIP),
        _ => None,
    }
}

/// Display form of a category identifier: first letter upper-cased.
pub fn display_name(class: &str) -> String {
    let mut chars = class.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn every_known_class_has_info() {
        for class in KNOWN_CLASSES {
            let info = flower_info(class).expect("known class must be in the table");
            assert!(!info.description.is_empty());
            assert!(!info.care.is_empty());
        }
    }

    #[test]
    fn unknown_class_has_no_info() {
        assert!(flower_info("orchid").is_none());
        assert!(flower_info("Rose").is_none(), "lookup is case-sensitive");
        assert!(flower_info("").is_none());
    }

    #[rstest]
    #[case("rose", "Rose")]
    #[case("sunflower", "Sunflower")]
    #[case("", "")]
    #[case("x", "X")]
    fn display_name_capitalizes_first_letter(#[case] class: &str, #[case] expected: &str) {
        assert_eq!(display_name(class), expected);
    }
}
