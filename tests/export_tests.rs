//! Writing summaries to disk and running batches of games.

use std::fs;

use werewolf_sim::core::{Player, Role, Roster, Seat};
use werewolf_sim::decision::ScriptedProvider;
use werewolf_sim::experiment::{ExperimentConfig, ExperimentRunner};
use werewolf_sim::export::save_summary;
use werewolf_sim::moderator::{GameSummary, Moderator};
use werewolf_sim::rules::Winner;

fn quick_table() -> Roster {
    Roster::new(vec![
        Seat::new(Player::new("W", Role::Werewolf), ScriptedProvider::targeting("A")),
        Seat::new(Player::new("A", Role::Villager), ScriptedProvider::targeting("W")),
        Seat::new(Player::new("B", Role::Villager), ScriptedProvider::targeting("W")),
        Seat::new(Player::new("C", Role::Villager), ScriptedProvider::targeting("W")),
    ])
    .unwrap()
}

#[test]
fn test_save_summary_writes_readable_json() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("runs").join("today");

    let mut roster = quick_table();
    let mut moderator = Moderator::new(&mut roster);
    moderator.run().unwrap();
    let summary = moderator.summary("game_test.json");

    let path = save_summary(&nested, "game_test.json", &summary).unwrap();
    assert_eq!(path, nested.join("game_test.json"));

    let text = fs::read_to_string(&path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(json["winner"], "Villagers");
    assert_eq!(json["rounds_played"], 1);
    assert_eq!(json["players"]["W"]["role"], "Werewolf");
    assert_eq!(json["log"][0]["event_type"], "WW_TARGET");
    assert_eq!(json["log"][0]["phase"], "NIGHT");
    assert_eq!(json["log"][0]["details"]["target"], "A");
    assert_eq!(json["log"][0]["details"]["werewolves"], serde_json::json!(["W"]));

    let restored: GameSummary = serde_json::from_str(&text).unwrap();
    assert_eq!(restored.winner, Some(Winner::Villagers));
    assert_eq!(restored.log.len(), summary.log.len());
    assert_eq!(restored.players, summary.players);
}

#[test]
fn test_runner_saves_one_file_per_run_and_resets() {
    let dir = tempfile::tempdir().unwrap();
    let runner = ExperimentRunner::new(
        ExperimentConfig::new()
            .with_runs(3)
            .with_output_dir(dir.path()),
    );
    let mut roster = quick_table();

    let outcomes = runner.run(&mut roster).unwrap();

    assert_eq!(outcomes.len(), 3);
    for (i, outcome) in outcomes.iter().enumerate() {
        assert_eq!(outcome.run, i + 1);
        assert_eq!(outcome.winner, Winner::Villagers);
        assert_eq!(outcome.rounds, 1);

        let path = outcome.path.as_ref().unwrap();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("game_"));
        assert!(name.ends_with(&format!("_n{}_r1_Villagers_4p.json", i + 1)));
    }
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 3);
    assert_eq!(roster.alive().count(), 4);
}

#[test]
fn test_runner_without_saving_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("unused");
    let runner = ExperimentRunner::new(
        ExperimentConfig::new()
            .with_runs(2)
            .with_save_logs(false)
            .with_output_dir(&out),
    );
    let mut roster = quick_table();

    let outcomes = runner.run(&mut roster).unwrap();

    assert!(outcomes.iter().all(|o| o.path.is_none()));
    assert!(!out.exists());
}

#[test]
fn test_runner_resets_roster_after_failed_game() {
    let mut roster = Roster::new(vec![
        Seat::new(
            Player::new("W", Role::Werewolf),
            ScriptedProvider::new().choosing(|_, _| "Ghost".to_string()),
        ),
        Seat::new(Player::new("A", Role::Villager), ScriptedProvider::new()),
        Seat::new(Player::new("B", Role::Villager), ScriptedProvider::new()),
        Seat::new(Player::new("C", Role::Villager), ScriptedProvider::new()),
    ])
    .unwrap();
    let runner = ExperimentRunner::new(ExperimentConfig::new().with_save_logs(false));

    assert!(runner.run(&mut roster).is_err());
    assert_eq!(roster.alive().count(), 4);
}
