//! Static fallback content tables.
//!
//! Process-wide constant data, read-only at runtime. The answer texts are
//! the curated tutoring corpus; several appear both as a sub-topic rule and
//! as a curated example pair, so they are named once here.

use crate::classify::labels::Category;

const ONE_PLUS_ONE: &str = "The answer to 1+1 is 2.";

const EVAPORATION: &str = "Evaporation is the process where liquid water changes into water vapor (gas). This happens when water molecules gain enough energy from heat to break free from the liquid's surface. Evaporation occurs at temperatures below water's boiling point and is a key part of the water cycle. It happens all around us - from wet clothes drying to puddles disappearing after rain.";

const SCIENCE_DEFINITION: &str = "Science is the systematic study of the natural world through observation, experimentation, and the formulation and testing of hypotheses. It aims to discover patterns and principles that help us understand how things work. The scientific method involves making observations, asking questions, forming hypotheses, conducting experiments, analyzing data, and drawing conclusions. Science encompasses many fields including physics, chemistry, biology, astronomy, geology, and more.";

const PRECIPITATION: &str = "Precipitation is the release of water from the atmosphere to the earth's surface in the form of rain, snow, sleet, or hail. It's a key part of the water cycle where water vapor condenses in the atmosphere and becomes heavy enough to fall to the ground. Precipitation is essential for replenishing freshwater supplies and supporting plant and animal life.";

const WATER_CYCLE: &str = "The water cycle, also known as the hydrologic cycle, describes the continuous movement of water on, above, and below the Earth's surface. It involves processes like evaporation, condensation, precipitation, infiltration, runoff, and transpiration. This cycle is essential for maintaining Earth's water resources and supporting all life on our planet.";

const ATOM: &str = "An atom is the basic unit of matter consisting of a nucleus (containing protons and neutrons) surrounded by electrons. Atoms are incredibly small - about 100 picometers in radius. Different arrangements of atoms form the elements on the periodic table, and atoms combine to form molecules that make up all physical substances.";

const ENERGY: &str = "Energy is the capacity to do work or produce heat. It exists in various forms such as kinetic, potential, thermal, electrical, chemical, and nuclear. According to the law of conservation of energy, energy cannot be created or destroyed, only transformed from one form to another. This fundamental principle underlies all physical processes in the universe.";

const STEAM: &str = "Steam is water in its gaseous state. It forms when water is heated to its boiling point (100\u{b0}C or 212\u{b0}F at standard pressure). The visible 'steam' we commonly see is actually tiny water droplets suspended in the air, formed when the invisible water vapor cools and condenses. Steam contains a significant amount of energy and has many industrial and practical applications.";

const ALGEBRA: &str = "Algebra is a branch of mathematics dealing with symbols and the rules for manipulating these symbols to solve equations and study mathematical structures. It forms the foundation for advanced mathematics and has applications in science, engineering, economics, and many other fields.";

const GEOMETRY: &str = "Geometry is the branch of mathematics concerned with the properties and relations of points, lines, surfaces, solids, and higher dimensional analogs. It helps us understand spatial relationships and has practical applications in architecture, engineering, physics, art, and many other fields.";

const CALCULUS: &str = "Calculus is a branch of mathematics focused on the study of rates of change and accumulation. It consists of two main branches: differential calculus (concerning rates of change and slopes of curves) and integral calculus (concerning accumulation of quantities and areas under or between curves). Calculus is essential for understanding physics, engineering, economics, and many scientific disciplines.";

const MANILA: &str = "The capital of the Philippines is Manila. It's located on the island of Luzon and serves as the country's political, economic, and cultural center.";

const ISDA: &str = "The word for 'fish' in Filipino (Tagalog) is 'isda'.";

const WORLD_WAR: &str = "World War II (1939-1945) was a global conflict that involved most of the world's nations forming two opposing alliances: the Allies and the Axis. It was the most widespread war in history, directly involving more than 100 million people and resulting in 70 to 85 million fatalities. The war ended with the Allied victory, the founding of the United Nations, and the beginning of the Cold War.";

const RENAISSANCE: &str = "The Renaissance was a period of European cultural, artistic, political, and scientific 'rebirth' following the Middle Ages. Spanning roughly the 14th to 17th centuries, it began in Italy and spread across Europe. This period was characterized by renewed interest in ancient Greek and Roman thought, the development of perspective in painting, and scientific discoveries that challenged traditional beliefs.";

const SHAKESPEARE: &str = "William Shakespeare (1564-1616) was an English poet, playwright, and actor, widely regarded as the greatest writer in the English language. His works include 39 plays, 154 sonnets, and other verses. His plays, such as Hamlet, Romeo and Juliet, Othello, and Macbeth, have been translated into every major language and are performed more often than those of any other playwright.";

const NOVEL: &str = "A novel is a relatively long work of narrative fiction, typically written in prose and published as a book. The modern novel emerged in the early 18th century. Novels portray characters and present a sequential organization of action and scenes, focusing on the gradual unfolding of a plot. They allow authors to explore complex themes, character development, and multiple storylines.";

const GRAMMAR: &str = "Grammar is the set of structural rules governing the composition of clauses, phrases, and words in a natural language. It includes syntax (sentence structure) and morphology (word structure). Understanding grammar helps in clear communication and effective writing across different contexts and purposes.";

const VERB: &str = "A verb is a word that expresses an action, occurrence, or state of being. Verbs are essential components of sentences, as they form the main part of the predicate. They can indicate when an action takes place (tense), whether it's completed or ongoing (aspect), and the relationship between the speaker and the action (mood).";

const CONTINENT: &str = "There are seven continents on Earth: Africa, Antarctica, Asia, Europe, North America, Australia (Oceania), and South America. They are the largest landmasses on the planet, separated by oceans and seas. Asia is the largest continent by both land area and population.";

const CLIMATE: &str = "Climate refers to the long-term pattern of weather in a particular area. It's determined by factors such as temperature, humidity, precipitation, air pressure, and wind. Earth has different climate zones, including tropical, dry, temperate, continental, and polar. Climate change is the long-term alteration of temperature and typical weather patterns in a region or the planet as a whole.";

/// Deterministic sub-topic rules: the first needle found in the lower-cased
/// question selects its answer.
pub(crate) const SUBTOPIC_RULES: &[(Category, &[(&str, &str)])] = &[
    (
        Category::Science,
        &[
            ("precipitation", PRECIPITATION),
            ("evaporation", EVAPORATION),
            ("water cycle", WATER_CYCLE),
            ("atom", ATOM),
            ("energy", ENERGY),
            ("steam", STEAM),
        ],
    ),
    (
        Category::Math,
        &[
            ("1+1", ONE_PLUS_ONE),
            ("algebra", ALGEBRA),
            ("geometry", GEOMETRY),
            ("calculus", CALCULUS),
        ],
    ),
    (
        Category::History,
        &[
            ("capital of the philippines", MANILA),
            ("fish in filipino", ISDA),
            ("world war", WORLD_WAR),
            ("renaissance", RENAISSANCE),
        ],
    ),
    (
        Category::Literature,
        &[("shakespeare", SHAKESPEARE), ("novel", NOVEL)],
    ),
    (
        Category::Language,
        &[("grammar", GRAMMAR), ("verb", VERB)],
    ),
    (
        Category::Geography,
        &[("continent", CONTINENT), ("climate", CLIMATE)],
    ),
];

/// Curated example pairs (question, answer) per category. One is picked
/// through the injected chooser when no sub-topic rule fires.
pub(crate) const CURATED_EXAMPLES: &[(Category, &[(&str, &str)])] = &[
    (Category::Math, &[("What is 1+1?", ONE_PLUS_ONE)]),
    (
        Category::Science,
        &[
            ("What is evaporation?", EVAPORATION),
            ("What is science?", SCIENCE_DEFINITION),
        ],
    ),
];

/// Per-category default answers when nothing more specific applies.
pub(crate) const CATEGORY_DEFAULTS: &[(Category, &str)] = &[
    (
        Category::Science,
        "That's an interesting science question! Science helps us understand the natural world through observation and experimentation. I'd be happy to explain more about this specific scientific topic if you provide more details.",
    ),
    (
        Category::Math,
        "I can help with your math question. In mathematics, it's important to understand the fundamental concepts and formulas. Could you provide more details about your specific math problem?",
    ),
    (
        Category::History,
        "Interesting question about history or culture! I'd be happy to share more information about this topic if you provide more details.",
    ),
    (
        Category::Literature,
        "Literature encompasses written works valued for their form, emotional impact, or intellectual depth. It includes poetry, drama, fiction, and non-fiction. What specific aspect of literature would you like to explore?",
    ),
    (
        Category::Language,
        "Language is a structured system of communication used by humans. It consists of sounds, gestures, or written symbols that express ideas according to systems of grammar and vocabulary. There are thousands of languages spoken around the world, each with its own unique features and cultural significance.",
    ),
    (
        Category::Geography,
        "Geography is the study of places and the relationships between people and their environments. It explores how natural environments are shaped and how human societies develop within these contexts. Geography spans both the natural and social sciences, examining physical landscapes as well as human societies.",
    ),
];

/// Last resort when even the category gives no hold.
pub(crate) const GENERIC_REPHRASE: &str = "I'm not sure I understand your question completely. Could you please provide more details or rephrase it? I can help with topics related to science, math, history, literature, geography, language, and general knowledge.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_needles_are_lowercase() {
        for (_, rules) in SUBTOPIC_RULES {
            for (needle, _) in *rules {
                assert_eq!(*needle, needle.to_lowercase());
            }
        }
    }

    #[test]
    fn test_no_empty_answers() {
        let answers = SUBTOPIC_RULES
            .iter()
            .flat_map(|(_, rules)| rules.iter().map(|(_, a)| *a))
            .chain(CATEGORY_DEFAULTS.iter().map(|(_, a)| *a))
            .chain(
                CURATED_EXAMPLES
                    .iter()
                    .flat_map(|(_, pairs)| pairs.iter().map(|(_, a)| *a)),
            );
        for answer in answers {
            assert!(!answer.trim().is_empty());
        }
    }

    #[test]
    fn test_general_has_no_curated_content() {
        assert!(SUBTOPIC_RULES.iter().all(|(c, _)| *c != Category::General));
        assert!(CATEGORY_DEFAULTS.iter().all(|(c, _)| *c != Category::General));
    }
}
