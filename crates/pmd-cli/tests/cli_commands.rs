//! Integration tests for the `pmd` CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Create a temp data directory with a small starter table and question table.
fn test_data() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("starters_map.json"),
        r#"{
    "Munchlax": {
        "explorers_sky": { "Male": ["Hardy"], "Female": [] }
    },
    "Pikachu": {
        "rescue_team": { "Male": ["Hasty"], "Female": ["Hasty"] },
        "explorers_sky": { "Male": ["Hardy"], "Female": ["Docile"] }
    },
    "Skitty": {
        "explorers_sky": { "Female": ["Naive"] }
    }
}
"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("questions_db_it.json"),
        r#"{
    "Explorers of Sky": [
        {
            "id": 1,
            "text": "Do you like to eat?",
            "text_it": "Ti piace mangiare?",
            "answers": [
                { "text": "Yes", "text_it": "Sì", "points": { "Hardy": 2, "Lax": 1 } },
                { "text": "No", "points": { "Calm": 1 } }
            ]
        },
        {
            "id": 2,
            "text": "Are you a good liar?",
            "answers": [
                { "text": "Of course", "points": { "Impish": 2 } },
                { "text": "Never", "points": { "Serious": 1 } }
            ]
        }
    ],
    "Red/Blue Rescue Team": [
        {
            "id": 1,
            "text": "Do you hurry?",
            "answers": [
                { "text": "Always", "points": { "Hasty": 3 } },
                { "text": "Sometimes", "points": { "Hasty": 3 } },
                { "text": "Rarely", "points": {} }
            ]
        }
    ]
}
"#,
    )
    .unwrap();
    dir
}

/// `pmd-quiz --data-dir <dir> <args...>` with a clean environment.
fn pmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pmd-quiz").unwrap();
    cmd.env_remove("PMD_LANG")
        .env_remove("PMD_DATA_DIR")
        .env("NO_COLOR", "1")
        .args(["--data-dir", dir.path().to_str().unwrap()]);
    cmd
}

// ---------------------------------------------------------------------------
// games
// ---------------------------------------------------------------------------

#[test]
fn games_lists_all_versions() {
    let dir = test_data();
    pmd(&dir)
        .arg("games")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("rescue_team")
                .and(predicate::str::contains("Explorers of Time/Darkness"))
                .and(predicate::str::contains("explorers_sky")),
        );
}

#[test]
fn games_in_italian() {
    let dir = test_data();
    pmd(&dir)
        .args(["games", "--lang", "it"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Esploratori del Cielo"));
}

// ---------------------------------------------------------------------------
// starters
// ---------------------------------------------------------------------------

#[test]
fn starters_for_game() {
    let dir = test_data();
    pmd(&dir)
        .args(["starters", "-g", "explorers_sky"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Munchlax")
                .and(predicate::str::contains("Pikachu"))
                .and(predicate::str::contains("Skitty"))
                .and(predicate::str::contains("3 starters")),
        );
}

#[test]
fn starters_default_game() {
    let dir = test_data();
    pmd(&dir)
        .arg("starters")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Pikachu")
                .and(predicate::str::contains("Munchlax").not())
                .and(predicate::str::contains("1 starters")),
        );
}

#[test]
fn starters_none_for_game() {
    let dir = test_data();
    pmd(&dir)
        .args(["starters", "-g", "Explorers of Time/Darkness"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No starters found"));
}

#[test]
fn starters_none_for_game_in_italian() {
    let dir = test_data();
    pmd(&dir)
        .args(["starters", "-g", "explorers_time_darkness", "--lang", "it"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Nessuno starter trovato per Esploratori del Tempo/Oscurità.",
        ));
}

// ---------------------------------------------------------------------------
// nature
// ---------------------------------------------------------------------------

#[test]
fn nature_null_gender_entry_is_not_available() {
    let dir = test_data();
    fs::write(
        dir.path().join("starters_map.json"),
        r#"{ "Munchlax": { "explorers_sky": { "Male": ["Hardy"], "Female": null } } }"#,
    )
    .unwrap();
    pmd(&dir)
        .args(["nature", "Munchlax", "-g", "explorers_sky", "-s", "female"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Not Available"));
    pmd(&dir)
        .args(["nature", "Munchlax", "-g", "explorers_sky"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hardy"));
}

#[test]
fn nature_resolves_target() {
    let dir = test_data();
    pmd(&dir)
        .args(["nature", "Munchlax", "-g", "explorers_sky"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Target Nature: Hardy")
                .and(predicate::str::contains("Explorers of Sky")),
        );
}

#[test]
fn nature_not_available_for_gender() {
    let dir = test_data();
    pmd(&dir)
        .args(["nature", "Munchlax", "-g", "explorers_sky", "-s", "female"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Not Available"));
}

#[test]
fn nature_in_italian() {
    let dir = test_data();
    pmd(&dir)
        .args(["nature", "Munchlax", "-g", "explorers_sky", "--lang", "it"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Natura Richiesta: Ardita"));
}

#[test]
fn nature_fails_unknown_game() {
    let dir = test_data();
    pmd(&dir)
        .args(["nature", "Munchlax", "-g", "gates_to_infinity"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown game"));
}

#[test]
fn nature_fails_unknown_gender() {
    let dir = test_data();
    pmd(&dir)
        .args(["nature", "Munchlax", "-s", "neither"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown gender"));
}

// ---------------------------------------------------------------------------
// solve
// ---------------------------------------------------------------------------

#[test]
fn solve_marks_best_answers() {
    let dir = test_data();
    pmd(&dir)
        .args(["solve", "Munchlax", "-g", "explorers_sky"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Target Nature: Hardy")
                .and(predicate::str::contains("* Yes"))
                .and(predicate::str::contains("+2 Hardy +1 Lax"))
                .and(predicate::str::contains("* No").not())
                .and(predicate::str::contains("Are you a good liar?"))
                .and(predicate::str::contains("2 questions")),
        );
}

#[test]
fn solve_marks_all_tied_answers() {
    let dir = test_data();
    pmd(&dir)
        .args(["solve", "Pikachu"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("* Always")
                .and(predicate::str::contains("* Sometimes"))
                .and(predicate::str::contains("* Rarely").not()),
        );
}

#[test]
fn solve_best_only_hides_other_answers() {
    let dir = test_data();
    pmd(&dir)
        .args(["solve", "Munchlax", "-g", "explorers_sky", "--best-only"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("* Yes")
                .and(predicate::str::contains("(any answer)"))
                .and(predicate::str::contains("Never").not()),
        );
}

#[test]
fn solve_with_query() {
    let dir = test_data();
    pmd(&dir)
        .args(["solve", "Munchlax", "-g", "explorers_sky", "-q", "LIAR"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Are you a good liar?")
                .and(predicate::str::contains("Do you like to eat?").not())
                .and(predicate::str::contains("1 question")),
        );
}

#[test]
fn solve_query_without_matches() {
    let dir = test_data();
    pmd(&dir)
        .args(["solve", "Munchlax", "-g", "explorers_sky", "-q", "zzzz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No matching questions found."));
}

#[test]
fn solve_unknown_creature_has_no_strategy() {
    let dir = test_data();
    pmd(&dir)
        .args(["solve", "Ditto", "-g", "explorers_sky"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Not Available")
                .and(predicate::str::contains("Do you like to eat?").not()),
        );
}

#[test]
fn solve_in_italian() {
    let dir = test_data();
    pmd(&dir)
        .args(["solve", "Munchlax", "-g", "explorers_sky", "--lang", "it"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Ti piace mangiare?")
                .and(predicate::str::contains("* Sì"))
                .and(predicate::str::contains("+2 Ardita"))
                // No Italian text in the data: English is shown.
                .and(predicate::str::contains("Are you a good liar?")),
        );
}

#[test]
fn solve_best_only_in_italian() {
    let dir = test_data();
    pmd(&dir)
        .args(["solve", "Munchlax", "-g", "explorers_sky", "-b", "--lang", "it"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("(qualsiasi risposta)")
                .and(predicate::str::contains("2 domande"))
                .and(predicate::str::contains("(any answer)").not()),
        );
}

#[test]
fn solve_skips_unknown_point_natures() {
    let dir = test_data();
    fs::write(
        dir.path().join("questions_db_it.json"),
        r#"{ "Explorers of Sky": [ { "id": 1, "text": "Hungry?", "answers": [
            { "text": "Always", "points": { "Hardy": 2, "Hardie": 3 } },
            { "text": "Never" }
        ] } ] }"#,
    )
    .unwrap();
    pmd(&dir)
        .args(["solve", "Munchlax", "-g", "explorers_sky"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("* Always")
                .and(predicate::str::contains("Hardie").not())
                .and(predicate::str::contains("1 question")),
        );
}

#[test]
fn solve_fails_without_data() {
    let dir = TempDir::new().unwrap();
    pmd(&dir)
        .args(["solve", "Munchlax"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read"));
}

#[test]
fn solve_fails_on_malformed_points() {
    let dir = test_data();
    fs::write(
        dir.path().join("questions_db_it.json"),
        r#"{ "Explorers of Sky": [ { "id": 1, "text": "?", "answers": [ { "text": "A", "points": { "Hardy": -1 } } ] } ] }"#,
    )
    .unwrap();
    pmd(&dir)
        .args(["solve", "Munchlax", "-g", "explorers_sky"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid data"));
}

#[test]
fn unknown_language_rejected() {
    let dir = test_data();
    pmd(&dir)
        .args(["games", "--lang", "de"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown language"));
}

// ---------------------------------------------------------------------------
// export
// ---------------------------------------------------------------------------

#[test]
fn export_json_to_stdout() {
    let dir = test_data();
    let output = pmd(&dir)
        .args(["export", "Munchlax", "-g", "explorers_sky"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["target_nature"], "Hardy");
    assert_eq!(json["game"], "explorers_sky");
    assert_eq!(json["questions"].as_array().unwrap().len(), 2);
    assert_eq!(json["questions"][0]["answers"][0]["is_best"], true);
    assert_eq!(json["questions"][0]["answers"][0]["score"], 2);
    assert_eq!(json["questions"][0]["answers"][1]["is_best"], false);
    assert_eq!(json["questions"][1]["answers"][0]["is_best"], false);
}

#[test]
fn export_without_target_scores_zero() {
    let dir = test_data();
    let output = pmd(&dir)
        .args(["export", "Munchlax", "-g", "explorers_sky", "-s", "female"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(json["target_nature"].is_null());
    for question in json["questions"].as_array().unwrap() {
        for answer in question["answers"].as_array().unwrap() {
            assert_eq!(answer["score"], 0);
            assert_eq!(answer["is_best"], false);
        }
    }
}

#[test]
fn export_to_file() {
    let dir = test_data();
    let out = dir.path().join("solved.json");
    pmd(&dir)
        .args(["export", "Pikachu", "-o", out.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported to"));

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(json["target_nature"], "Hasty");
    assert_eq!(json["game"], "rescue_team");
}
