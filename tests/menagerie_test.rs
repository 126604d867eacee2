// Integration tests for the menagerie simulation

use edulab::menagerie::engine::MenagerieEngine;

/// Build the counted input form and run it through a fresh engine.
fn run(commands: &[&str]) -> Vec<String> {
    let mut input = format!("{}\n", commands.len());
    for command in commands {
        input.push_str(command);
        input.push('\n');
    }
    let mut engine = MenagerieEngine::new();
    engine.run(&input).expect("invalid command count");
    engine.transcript().lines().to_vec()
}

#[test]
fn test_create_announces_and_talk_finds() {
    let output = run(&["CREATE M Rex 3 Cage", "TALK Cage M 0", "TALK Cage M 1"]);
    assert_eq!(
        output,
        [
            "My name is Rex, days lived: 3",
            "My name is Rex, days lived: 3",
            "Animal not found",
        ]
    );
}

#[test]
fn test_apply_substance_halves_days_rounded_up() {
    let output = run(&[
        "CREATE M Rex 3 Cage",
        "APPLY_SUBSTANCE Cage M 0",
        "TALK Cage BM 0",
    ]);
    assert_eq!(
        output,
        [
            "My name is Rex, days lived: 3",
            "Rex is now a BetterMouse, days lived: 2",
            "My name is Rex, days lived: 2",
        ]
    );
}

#[test]
fn test_mismatched_create_lands_in_freedom() {
    let output = run(&[
        "CREATE F Nemo 2 Cage",
        "TALK Freedom 0",
        "APPLY_SUBSTANCE Freedom F 0",
        "REMOVE_SUBSTANCE Freedom BF 0",
        "ATTACK Freedom F 0 0",
    ]);
    assert_eq!(
        output,
        [
            "My name is Nemo, days lived: 2",
            "My name is Nemo, days lived: 2",
            "Substance cannot be applied in freedom",
            "Substance cannot be removed in freedom",
            "Animals cannot attack in Freedom",
        ]
    );
}

#[test]
fn test_bird_in_aquarium_lands_in_freedom() {
    let output = run(&["CREATE B Iago 1 Aquarium", "TALK Freedom 0"]);
    assert_eq!(
        output,
        [
            "My name is Iago, days lived: 1",
            "My name is Iago, days lived: 1",
        ]
    );
}

#[test]
fn test_monster_empties_source_pen() {
    let output = run(&[
        "CREATE BM Rex 4 Cage",
        "CREATE BM Sam 6 Cage",
        "APPLY_SUBSTANCE Cage BM 0",
        "TALK Cage BM 0",
        "TALK Freedom 0",
    ]);
    assert_eq!(
        output,
        [
            "My name is Rex, days lived: 4",
            "My name is Sam, days lived: 6",
            "Rex is now a Monster, days lived: 1",
            "Animal not found",
            "My name is Rex, days lived: 1",
        ]
    );
}

#[test]
fn test_monster_creation_moves_it_to_freedom() {
    use edulab::menagerie::habitat::PenId;

    let mut engine = MenagerieEngine::new();
    engine
        .run("3\nCREATE BM Rex 4 Cage\nCREATE BM Sam 6 Cage\nAPPLY_SUBSTANCE Cage BM 1\n")
        .expect("invalid command count");

    let habitats = engine.habitats();
    assert!(habitats.pen(PenId::BetterMouseCage).is_empty());
    assert_eq!(habitats.pen(PenId::Freedom).len(), 1);
    let monster = habitats.pen(PenId::Freedom).get(0).unwrap();
    assert_eq!(monster.name(), "Sam");
    assert_eq!(monster.days_lived(), 1);
}

#[test]
fn test_monster_dies_on_next_period() {
    let output = run(&[
        "CREATE BF Gil 2 Aquarium",
        "APPLY_SUBSTANCE Aquarium BF 0",
        "period",
        "TALK Freedom 0",
    ]);
    assert_eq!(
        output,
        [
            "My name is Gil, days lived: 2",
            "Gil is now a Monster, days lived: 1",
            "Gil has died of old days",
            "Animal not found",
        ]
    );
}

#[test]
fn test_remove_substance_doubles_days() {
    let output = run(&[
        "CREATE BM Rex 2 Aquarium",
        "REMOVE_SUBSTANCE Aquarium BM 0",
        "TALK Aquarium M 0",
        "REMOVE_SUBSTANCE Aquarium M 0",
    ]);
    assert_eq!(
        output,
        [
            "My name is Rex, days lived: 2",
            "Rex is now a Mouse, days lived: 4",
            "My name is Rex, days lived: 4",
            "Invalid substance removal",
        ]
    );
}

#[test]
fn test_attack_kills_prey() {
    let output = run(&[
        "CREATE B Abel 1 Cage",
        "CREATE B Cain 2 Cage",
        "ATTACK Cage B 1 0",
        "TALK Cage B 0",
        "TALK Cage B 1",
    ]);
    assert_eq!(
        output,
        [
            "My name is Abel, days lived: 1",
            "My name is Cain, days lived: 2",
            "Bird is attacking",
            "My name is Cain, days lived: 2",
            "Animal not found",
        ]
    );
}

#[test]
fn test_attack_reports_dynamic_variant() {
    let output = run(&[
        "CREATE BF Gil 1 Aquarium",
        "CREATE BF Ray 2 Aquarium",
        "ATTACK Aquarium BF 0 1",
    ]);
    assert_eq!(output.last().map(String::as_str), Some("BetterFish is attacking"));
}

#[test]
fn test_attack_out_of_bounds() {
    let output = run(&["CREATE B Abel 1 Cage", "ATTACK Cage B 0 3"]);
    assert_eq!(output.last().map(String::as_str), Some("Animal not found"));
}

#[test]
fn test_positions_follow_sort_order() {
    // Sorted by days-lived, then name: Bob(2), Zoe(2), Abe(5).
    let output = run(&[
        "CREATE B Zoe 2 Cage",
        "CREATE B Abe 5 Cage",
        "CREATE B Bob 2 Cage",
        "TALK Cage B 0",
        "TALK Cage B 1",
        "TALK Cage B 2",
    ]);
    assert_eq!(
        output[3..],
        [
            "My name is Bob, days lived: 2",
            "My name is Zoe, days lived: 2",
            "My name is Abe, days lived: 5",
        ]
    );
}

#[test]
fn test_unrecognized_token_advances_time() {
    let output = run(&[
        "CREATE B Old 10 Cage",
        "CREATE B Young 1 Cage",
        "anything",
        "TALK Cage B 0",
    ]);
    assert_eq!(
        output,
        [
            "My name is Old, days lived: 10",
            "My name is Young, days lived: 1",
            "Old has died of old days",
            "My name is Young, days lived: 2",
        ]
    );
}

#[test]
fn test_period_sweeps_pens_in_declaration_order() {
    // Cages are swept before aquariums, freedom last.
    let output = run(&[
        "CREATE F Gil 10 Aquarium",
        "CREATE B Hawk 10 Cage",
        "CREATE M Free 10 Freedom",
        "period",
    ]);
    assert_eq!(
        output[3..],
        [
            "Hawk has died of old days",
            "Gil has died of old days",
            "Free has died of old days",
        ]
    );
}

#[test]
fn test_malformed_line_is_skipped() {
    let output = run(&["CREATE M Rex three Cage", "CREATE M Rex 3 Cage"]);
    assert_eq!(output, ["My name is Rex, days lived: 3"]);
}

#[test]
fn test_command_count_limits_processing() {
    let mut engine = MenagerieEngine::new();
    engine
        .run("1\nCREATE M Rex 3 Cage\nCREATE M Sam 3 Cage\n")
        .expect("invalid command count");
    assert_eq!(
        engine.transcript().lines(),
        ["My name is Rex, days lived: 3"]
    );
}

#[test]
fn test_bad_command_count_is_an_error() {
    let mut engine = MenagerieEngine::new();
    assert!(engine.run("many\nCREATE M Rex 3 Cage\n").is_err());
}
