use taskboard::output::{format_human, HumanOutput};

#[test]
fn format_human_includes_sections() {
    let mut human = HumanOutput::new("taskboard initialized");
    human.push_summary("data dir", "/tmp/data");
    human.push_summary("created", "tasks.json, categories.json");
    human.push_next_step("taskboard serve");

    let rendered = format_human(&human);
    assert!(rendered.starts_with("taskboard initialized"));
    assert!(rendered.contains("Summary:"));
    assert!(rendered.contains("- data dir: /tmp/data"));
    assert!(rendered.contains("- created: tasks.json, categories.json"));
    assert!(rendered.contains("Next steps:"));
    assert!(rendered.contains("- taskboard serve"));
}

#[test]
fn format_human_omits_empty_sections() {
    let human = HumanOutput::new("taskboard already initialized");
    let rendered = format_human(&human);
    assert_eq!(rendered, "taskboard already initialized");
}
