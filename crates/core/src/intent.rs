use crate::models::Intent;

#[derive(Debug, Clone, Copy)]
pub struct IntentRule {
    pub intent: Intent,
    pub keywords: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntentMatch {
    pub intent: Intent,
    pub keyword: &'static str,
}

/// Scanned top to bottom; the first rule with a keyword contained in the
/// normalized message wins. Keywords are plain lowercase substrings, so a
/// short one like "hi" also fires inside "this" or "hire"; the hire rule's
/// "hire" and "hiring" can therefore never win on their own.
pub static INTENT_TABLE: &[IntentRule] = &[
    IntentRule {
        intent: Intent::Greeting,
        keywords: &[
            "hello",
            "hi",
            "namaskar",
            "नमस्ते",
            "नमस्कार",
            "प्रणाम",
            "ନମସ୍କାର",
            "ନମସ୍ତେ",
        ],
    },
    IntentRule {
        intent: Intent::Projects,
        keywords: &[
            "project",
            "portfolio",
            "प्रोजेक्ट",
            "परियोजना",
            "प्रकल्प",
            "ପ୍ରୋଜେକ୍ଟ",
            "ପ୍ରକଳ୍ପ",
        ],
    },
    IntentRule {
        intent: Intent::NamasteRides,
        keywords: &["namaste", "carpool", "ride"],
    },
    IntentRule {
        intent: Intent::NetrikXr,
        keywords: &["netrik", "augmented reality"],
    },
    IntentRule {
        intent: Intent::QrMenu,
        keywords: &["qr", "menu"],
    },
    IntentRule {
        intent: Intent::Hire,
        keywords: &[
            "hire",
            "hiring",
            "freelance",
            "collaborat",
            "नियुक्त",
            "हायर",
            "ନିଯୁକ୍ତି",
            "नियोजनम्",
        ],
    },
    IntentRule {
        intent: Intent::Skills,
        keywords: &[
            "skill",
            "tech stack",
            "technolog",
            "कौशल",
            "स्किल",
            "ଦକ୍ଷତା",
            "दक्षता",
        ],
    },
    IntentRule {
        intent: Intent::Meditation,
        keywords: &["meditat", "dhyana", "ध्यान", "ଧ୍ୟାନ"],
    },
    IntentRule {
        intent: Intent::Donate,
        keywords: &["donat", "contribut", "दान", "ଦାନ"],
    },
    IntentRule {
        intent: Intent::Contact,
        keywords: &[
            "contact",
            "email",
            "reach",
            "linkedin",
            "github",
            "संपर्क",
            "सम्पर्क",
            "ସମ୍ପର୍କ",
        ],
    },
    IntentRule {
        intent: Intent::Meeting,
        keywords: &[
            "meeting",
            "meet",
            "schedule",
            "appointment",
            "availability",
            "calendar",
            "मीटिंग",
            "बैठक",
            "सभा",
            "ମିଟିଂ",
            "ସଭା",
        ],
    },
    IntentRule {
        intent: Intent::About,
        keywords: &["about", "who is", "who are", "yourself", "परिचय", "ପରିଚୟ"],
    },
    IntentRule {
        intent: Intent::Pricing,
        keywords: &[
            "price",
            "pricing",
            "cost",
            "rate",
            "budget",
            "quote",
            "कीमत",
            "मूल्य",
            "ଦାମ",
            "ମୂଲ୍ୟ",
        ],
    },
    IntentRule {
        intent: Intent::Timeline,
        keywords: &["time", "deadline", "delivery", "how long", "समय", "ସମୟ"],
    },
    IntentRule {
        intent: Intent::Thanks,
        keywords: &["thank", "धन्यवाद", "शुक्रिया", "ଧନ୍ୟବାଦ"],
    },
];

pub fn normalize_text(input: &str) -> String {
    input
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

pub fn classify_intent(text: &str) -> Option<IntentMatch> {
    let lower = normalize_text(text);
    if lower.is_empty() {
        return None;
    }

    INTENT_TABLE.iter().find_map(|rule| {
        first_contained(&lower, rule.keywords).map(|keyword| IntentMatch {
            intent: rule.intent,
            keyword,
        })
    })
}

pub fn intent_keywords(intent: Intent) -> &'static [&'static str] {
    INTENT_TABLE
        .iter()
        .find(|rule| rule.intent == intent)
        .map(|rule| rule.keywords)
        .unwrap_or_default()
}

fn first_contained(input: &str, needles: &'static [&'static str]) -> Option<&'static str> {
    needles.iter().copied().find(|needle| input.contains(*needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_meeting_request() {
        let hit = classify_intent("what's your availability for a meeting").unwrap();
        assert_eq!(hit.intent, Intent::Meeting);
    }

    #[test]
    fn earlier_intent_wins_on_overlap() {
        // greeting is declared before hire
        let hit = classify_intent("Hello, can I hire you?").unwrap();
        assert_eq!(hit.intent, Intent::Greeting);
        assert_eq!(hit.keyword, "hello");
    }

    #[test]
    fn short_keyword_fires_inside_longer_word() {
        let hit = classify_intent("I want to hire a freelancer").unwrap();
        assert_eq!(hit.intent, Intent::Greeting);
        assert_eq!(hit.keyword, "hi");
    }

    #[test]
    fn matching_is_case_insensitive() {
        let hit = classify_intent("WHAT SKILLS DO YOU HAVE").unwrap();
        assert_eq!(hit.intent, Intent::Skills);
    }

    #[test]
    fn matches_indic_scripts() {
        assert_eq!(
            classify_intent("नमस्कार").map(|hit| hit.intent),
            Some(Intent::Greeting)
        );
        assert_eq!(
            classify_intent("ସଭା ପାଇଁ ସମୟ").map(|hit| hit.intent),
            Some(Intent::Meeting)
        );
        assert_eq!(
            classify_intent("मुझे आपको नियुक्त करना है").map(|hit| hit.intent),
            Some(Intent::Hire)
        );
    }

    #[test]
    fn blank_and_unmatched_text_yield_nothing() {
        assert_eq!(classify_intent(""), None);
        assert_eq!(classify_intent("   \n\t "), None);
        assert_eq!(classify_intent("asdkjasd"), None);
    }

    #[test]
    fn table_lists_every_intent_once_in_declaration_order() {
        let intents = INTENT_TABLE.iter().map(|rule| rule.intent).collect::<Vec<_>>();
        let mut sorted = intents.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(intents, sorted);
        assert_eq!(intents.len(), 15);
    }

    #[test]
    fn keywords_are_already_normalized() {
        for rule in INTENT_TABLE {
            assert!(!rule.keywords.is_empty(), "{} has no keywords", rule.intent);
            for keyword in rule.keywords {
                assert_eq!(*keyword, normalize_text(keyword), "keyword {keyword:?}");
            }
        }
    }

    #[test]
    fn common_words_do_not_trigger_greeting_or_meeting() {
        assert_eq!(classify_intent("they said you build apps"), None);
        assert_eq!(classify_intent("basically what do you do"), None);
    }

    const SHADOWED_KEYWORDS: &[&str] = &["hire", "hiring"];

    #[test]
    fn every_keyword_selects_its_own_intent_unless_shadowed() {
        let mut shadowed = Vec::new();

        for (position, rule) in INTENT_TABLE.iter().enumerate() {
            for keyword in rule.keywords {
                let hit = classify_intent(keyword)
                    .unwrap_or_else(|| panic!("keyword {keyword:?} matched nothing"));
                if hit.intent == rule.intent {
                    continue;
                }

                let earlier = INTENT_TABLE[..position]
                    .iter()
                    .flat_map(|earlier| earlier.keywords.iter())
                    .any(|earlier| keyword.contains(earlier));
                assert!(
                    earlier,
                    "{keyword:?} of {} resolved to {} without an earlier overlapping keyword",
                    rule.intent,
                    hit.intent
                );
                shadowed.push(*keyword);
            }
        }

        assert_eq!(shadowed, SHADOWED_KEYWORDS);
    }

    #[test]
    fn exposes_keywords_per_intent() {
        assert!(intent_keywords(Intent::Thanks).contains(&"thank"));
    }
}
