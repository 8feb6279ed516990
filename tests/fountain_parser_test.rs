use screenplay_extract::parser::fountain_parser::FountainParser;
use screenplay_extract::{extract_fountain, Conf, Element, ElementKind, Extractor, FountainFilter};

fn kinds(elements: &[Element]) -> Vec<ElementKind> {
    elements.iter().map(|e| e.kind()).collect()
}

#[test]
fn test_scene_character_dialogue() {
    let result = FountainParser::new().parse("INT. HOUSE - DAY\n\nJOHN\nHello there.\n");
    let elements = result.elements.elements();

    assert_eq!(
        kinds(elements),
        vec![ElementKind::SceneHeading, ElementKind::Character, ElementKind::Dialogue]
    );
    assert_eq!(elements[2].text, "Hello there.");

    let filter = FountainFilter::from_text("INT. HOUSE - DAY\n\nJOHN\nHello there.\n", &Conf::default());
    assert_eq!(filter.scenes(), vec!["HOUSE - DAY"]);
    assert_eq!(filter.characters().unwrap(), vec!["JOHN"]);
}

#[test]
fn test_dual_dialogue_marks_both_characters() {
    let script = "INT. GYM - DAY\n\nBRICK\nScrew retirement.\n\nSTEEL ^\nScrew retirement.\n";
    let result = FountainParser::new().parse(script);

    let characters: Vec<&Element> = result
        .elements
        .iter()
        .filter(|e| e.kind() == ElementKind::Character)
        .collect();
    assert_eq!(characters.len(), 2, "应该解析出两个角色");
    assert_eq!(characters[0].text, "BRICK");
    assert_eq!(characters[1].text, "STEEL");
    assert!(characters.iter().all(|c| c.is_dual_dialogue()), "两个角色都应是双对话");
}

#[test]
fn test_first_line_is_never_a_character() {
    // 文档首尾空白会被去掉，BRICK 前没有空行，只能算 Action
    let result = FountainParser::new().parse(
        "\n\nBRICK\nScrew retirement.\n\nSTEEL ^\nScrew retirement.\n",
    );
    let elements = result.elements.elements();

    assert_eq!(elements[0].kind(), ElementKind::Action);
    assert_eq!(elements[0].text, "BRICK\nScrew retirement.");
    assert_eq!(elements[1].kind(), ElementKind::Character);
    assert!(elements[1].is_dual_dialogue());
}

#[test]
fn test_boneyard_block() {
    let result = FountainParser::new().parse("/* note\nmore */\n");
    let elements = result.elements.elements();

    assert_eq!(elements.len(), 1, "只应有一个注释块元素");
    assert_eq!(elements[0].kind(), ElementKind::Boneyard);
    assert_eq!(elements[0].text, " note\nmore ");
}

#[test]
fn test_boneyard_keeps_blank_lines() {
    let result = FountainParser::new().parse("INT. HOUSE - DAY\n\n/* first\n\nlast */\n\nHe sits.\n");
    let elements = result.elements.elements();

    assert_eq!(
        kinds(elements),
        vec![ElementKind::SceneHeading, ElementKind::Boneyard, ElementKind::Action]
    );
    assert_eq!(elements[1].text, " first\n\nlast ");
}

#[test]
fn test_unclosed_boneyard_is_flushed() {
    let result = FountainParser::new().parse("INT. HOUSE - DAY\n\n/* never closed\nstill here");
    let last = result.elements.last().unwrap();

    assert_eq!(last.kind(), ElementKind::Boneyard);
    assert_eq!(last.text, " never closed\nstill here");
}

#[test]
fn test_stray_close_marker_is_dropped() {
    let script = "INT. HOUSE - DAY\n\nHe waits. */\n\nTHE END */\nFADE\n\nShe leaves.";
    let result = FountainParser::new().parse(script);
    let elements = result.elements.elements();

    assert!(elements.iter().all(|e| !e.text.contains("*/")), "未开启的 */ 不应进入任何元素");
    assert!(elements.iter().all(|e| e.kind() != ElementKind::Character));
    assert!(elements.iter().all(|e| e.kind() != ElementKind::Dialogue));
    assert_eq!(elements.last().unwrap().text, "She leaves.");

    let breakdown = extract_fountain(script, &Conf::default());
    assert!(breakdown.characters.is_empty());
}

#[test]
fn test_continuation_merges_lines() {
    let result = FountainParser::new().parse("INT. HOUSE - DAY\n\nThe door opens.\nA man enters.\n");
    let elements = result.elements.elements();

    assert_eq!(elements.len(), 2);
    assert_eq!(elements[1].kind(), ElementKind::Action);
    assert_eq!(elements[1].text, "The door opens.\nA man enters.");
}

#[test]
fn test_dialogue_block_with_parenthetical() {
    let script = "\
INT. HOUSE - DAY

JOHN
(whispering)
I know.
You know.

He leaves.";
    let result = FountainParser::new().parse(script);
    let elements = result.elements.elements();

    assert_eq!(
        kinds(elements),
        vec![
            ElementKind::SceneHeading,
            ElementKind::Character,
            ElementKind::Parenthetical,
            ElementKind::Dialogue,
            ElementKind::Action,
        ]
    );
    assert_eq!(elements[3].text, "I know.\nYou know.");
    assert_eq!(elements[4].text, "He leaves.");
}

#[test]
fn test_structural_elements() {
    let script = "\
INT. HOUSE - DAY

# Act One

## Setup

= The hero wakes up.

[[ check continuity ]]

.SNIPER SCOPE POV #7#

===

CUT TO:

> Burn to white.";
    let result = FountainParser::new().parse(script);
    let elements = result.elements.elements();

    assert_eq!(
        kinds(elements),
        vec![
            ElementKind::SceneHeading,
            ElementKind::SectionHeading,
            ElementKind::SectionHeading,
            ElementKind::Synopsis,
            ElementKind::Comment,
            ElementKind::SceneHeading,
            ElementKind::PageBreak,
            ElementKind::Transition,
            ElementKind::Transition,
        ]
    );
    assert_eq!(elements[1].depth(), Some(1));
    assert_eq!(elements[2].depth(), Some(2));
    assert_eq!(elements[2].text, "Setup");
    assert_eq!(elements[3].text, " The hero wakes up.");
    assert_eq!(elements[4].text, "check continuity");
    assert_eq!(elements[5].text, "SNIPER SCOPE POV");
    assert_eq!(elements[5].scene_number(), Some("7"));
    assert_eq!(elements[6].text, "===");
    assert_eq!(elements[7].text, "CUT TO:");
    assert_eq!(elements[8].text, " Burn to white.");
}

#[test]
fn test_line_endings_are_normalized() {
    let unix = FountainParser::new().parse("INT. HOUSE - DAY\n\nJOHN\nHi.\n");
    let windows = FountainParser::new().parse("INT. HOUSE - DAY\r\n\r\nJOHN\r\nHi.\r\n");
    let mac = FountainParser::new().parse("INT. HOUSE - DAY\r\rJOHN\rHi.\r");

    assert_eq!(unix.elements, windows.elements);
    assert_eq!(unix.elements, mac.elements);
}

#[test]
fn test_empty_document() {
    let result = FountainParser::new().parse("");
    assert!(result.elements.is_empty());
    assert!(extract_fountain("   \n\n  ", &Conf::default()).is_empty());
}

#[test]
fn test_capitalized_words() {
    let script = "INT. HOUSE - DAY\n\nHe grabs the KEY and the PHONE.\n";
    let breakdown = extract_fountain(script, &Conf::default());

    assert!(breakdown.capitalized.contains(&"KEY".to_string()));
    assert!(breakdown.capitalized.contains(&"PHONE".to_string()));
    assert_eq!(breakdown.capitalized, vec!["KEY", "PHONE"]);
}

#[test]
fn test_capitalized_skips_character_names() {
    let script = "\
INT. HOUSE - DAY

JOHN
Where is it?

JOHN runs to the SAFE.";
    let breakdown = extract_fountain(script, &Conf::default());
    assert_eq!(breakdown.characters, vec!["JOHN"]);
    assert_eq!(breakdown.capitalized, vec!["SAFE"]);

    let mut conf = Conf::default();
    conf.exclude_characters_from_capitalized = false;
    let breakdown = extract_fountain(script, &conf);
    assert_eq!(breakdown.capitalized, vec!["JOHN", "SAFE"]);
}
