use team_namer::{
    generate_multiple_names, generate_random_team_name, generate_team_name, Category,
    TeamNameForm, TeamNameGenerator, WordBank,
};

fn assert_title_cased(name: &str) {
    assert!(!name.is_empty());
    for word in name.split(' ') {
        let mut chars = word.chars();
        assert!(
            chars.next().is_some_and(|c| c.is_ascii_uppercase()),
            "word not title-cased in {:?}",
            name
        );
        assert!(
            chars.all(|c| c.is_ascii_lowercase()),
            "word not title-cased in {:?}",
            name
        );
    }
}

#[test]
fn random_entry_point_returns_a_name() {
    for _ in 0..20 {
        let name = generate_random_team_name();
        assert_title_cased(&name);
        assert!(name.split(' ').count() >= 2);
    }
}

#[test]
fn guided_entry_point_resolves_form_fields() {
    let form = TeamNameForm {
        color: Some("red".to_string()),
        animal: Some("tiger".to_string()),
        ..Default::default()
    };
    for _ in 0..20 {
        let name = generate_team_name(&form);
        assert_title_cased(&name);
        assert!(name.contains("Red"), "missing color in {:?}", name);
        assert!(name.contains("Tigers"), "missing animal in {:?}", name);
    }
}

#[test]
fn batch_entry_point_enforces_the_floor() {
    let names = generate_multiple_names(5, None);
    assert_eq!(names.len(), 15);
    for (i, name) in names.iter().enumerate() {
        assert_title_cased(name);
        assert!(
            !names[..i].contains(name),
            "duplicate {:?} in batch",
            name
        );
    }
}

#[test]
fn batch_entry_point_with_form_keeps_guided_terms() {
    let form = TeamNameForm {
        animal: Some("Tiger".to_string()),
        ..Default::default()
    };
    let names = generate_multiple_names(20, Some(&form));
    assert_eq!(names.len(), 20);
    assert!(
        names.iter().any(|name| name.contains("Tigers")),
        "no batch entry kept the guided animal: {:?}",
        names
    );
}

#[test]
fn form_payload_round_trips_through_json() {
    let payload = r#"{"color": "  Navy  ", "people": "spartans", "place": ""}"#;
    let form: TeamNameForm = serde_json::from_str(payload).unwrap();
    assert_eq!(form.field(Category::Color), Some("Navy"));
    assert_eq!(form.field(Category::People), Some("spartans"));
    assert_eq!(form.field(Category::Place), None);

    let mut gen = TeamNameGenerator::with_seed(21);
    for _ in 0..20 {
        let name = gen.generate(&form);
        assert_title_cased(&name);
        assert!(name.contains("Navy"), "missing color in {:?}", name);
        assert!(name.contains("Spartans"), "missing people in {:?}", name);
    }
}

#[test]
fn seeded_generators_are_reproducible() {
    let form = TeamNameForm {
        place: Some("brooklyn".to_string()),
        ..Default::default()
    };
    let batch_a = TeamNameGenerator::with_seed(99).generate_many(25, Some(&form));
    let batch_b = TeamNameGenerator::with_seed(99).generate_many(25, Some(&form));
    assert_eq!(batch_a, batch_b);
    assert_eq!(batch_a.len(), 25);
}

#[test]
fn every_generated_word_comes_from_the_bank() {
    let bank = WordBank::standard();
    let mut vocabulary: Vec<String> = Vec::new();
    for category in Category::ALL {
        for word in bank.words(category) {
            vocabulary.push(word.to_string());
        }
    }

    let mut gen = TeamNameGenerator::with_seed(33);
    for _ in 0..100 {
        let name = gen.generate_random();
        let mut rest = name.as_str();
        while !rest.is_empty() {
            let matched = vocabulary
                .iter()
                .filter(|term| rest.starts_with(term.as_str()))
                .max_by_key(|term| term.len());
            match matched {
                Some(term) => {
                    rest = rest[term.len()..].trim_start_matches(' ');
                }
                None => panic!("{:?} contains a non-bank prefix: {:?}", name, rest),
            }
        }
    }
}
