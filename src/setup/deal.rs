//! Role dealing and roster construction.

use tracing::{debug, info};

use crate::core::{GameConfig, GameRng, Player, Role, Roster, Seat, SetupError};
use crate::decision::DecisionProvider;

/// Everything a provider factory needs to know about a seat.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeatPlan {
    /// 0-based roster position.
    pub index: usize,
    pub name: String,
    pub role: Role,
    /// Whether the seat should be driven by a human.
    pub human: bool,
}

/// Default seat names: `Player_1`, `Player_2`, ...
#[must_use]
pub fn player_names(count: usize) -> Vec<String> {
    (1..=count).map(|i| format!("Player_{i}")).collect()
}

/// Deal roles for `config`: werewolves first, then villagers, shuffled with
/// the config's seed.
#[must_use]
pub fn deal_roles(config: &GameConfig) -> Vec<Role> {
    let werewolves = config.werewolf_count().min(config.player_count);
    let mut roles: Vec<Role> = std::iter::repeat(Role::Werewolf)
        .take(werewolves)
        .chain(std::iter::repeat(Role::Villager).take(config.player_count - werewolves))
        .collect();

    let mut rng = GameRng::new(config.seed).for_context("roles");
    debug!(seed = config.seed, stream = rng.seed(), werewolves, "dealing roles");
    rng.shuffle(&mut roles);
    roles
}

/// Plan every seat: names, dealt roles, and which seats are human.
pub fn plan_seats(config: &GameConfig) -> Result<Vec<SeatPlan>, SetupError> {
    config.validate()?;

    let plans = player_names(config.player_count)
        .into_iter()
        .zip(deal_roles(config))
        .enumerate()
        .map(|(index, (name, role))| SeatPlan {
            index,
            name,
            role,
            human: index < config.human_count,
        })
        .collect();
    Ok(plans)
}

/// Build a roster for `config`, asking `provider_for` to supply each seat's
/// decision provider.
pub fn build_roster<F>(config: &GameConfig, mut provider_for: F) -> Result<Roster, SetupError>
where
    F: FnMut(&SeatPlan) -> Box<dyn DecisionProvider>,
{
    let seats = plan_seats(config)?
        .into_iter()
        .map(|plan| {
            let kind = if plan.human { "human" } else { "generated" };
            info!(player = %plan.name, role = %plan.role, kind, "seat assigned");
            let provider = provider_for(&plan);
            Seat::boxed(Player::new(plan.name, plan.role), provider)
        })
        .collect();

    Roster::new(seats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decision::ScriptedProvider;

    #[test]
    fn test_player_names() {
        assert_eq!(player_names(3), vec!["Player_1", "Player_2", "Player_3"]);
    }

    #[test]
    fn test_deal_roles_counts() {
        let config = GameConfig::new().with_players(9);
        let roles = deal_roles(&config);

        assert_eq!(roles.len(), 9);
        assert_eq!(roles.iter().filter(|r| r.is_werewolf()).count(), 2);
    }

    #[test]
    fn test_deal_is_reproducible_per_seed() {
        let config = GameConfig::new().with_players(12).with_seed(5);
        assert_eq!(deal_roles(&config), deal_roles(&config));
    }

    #[test]
    fn test_plan_marks_leading_seats_human() {
        let config = GameConfig::new().with_players(5).with_humans(2);
        let plans = plan_seats(&config).unwrap();

        let humans: Vec<_> = plans.iter().filter(|p| p.human).map(|p| p.index).collect();
        assert_eq!(humans, vec![0, 1]);
    }

    #[test]
    fn test_plan_rejects_invalid_config() {
        let config = GameConfig::new().with_players(3).with_humans(0);
        assert!(matches!(plan_seats(&config), Err(SetupError::TooFewPlayers { .. })));
    }

    #[test]
    fn test_build_roster_uses_factory() {
        let config = GameConfig::new().with_players(4).with_humans(1);
        let mut asked = Vec::new();

        let roster = build_roster(&config, |plan| {
            asked.push((plan.name.clone(), plan.human));
            Box::new(ScriptedProvider::new())
        })
        .unwrap();

        assert_eq!(roster.len(), 4);
        assert_eq!(asked[0], ("Player_1".to_string(), true));
        assert!(asked[1..].iter().all(|(_, human)| !human));
        assert_eq!(roster.alive_counts(), (1, 3));
    }

    #[test]
    fn test_build_roster_with_several_terminal_humans() {
        use crate::decision::HumanProvider;

        let config = GameConfig::new().with_players(5).with_humans(3);
        let roster = build_roster(&config, |plan| -> Box<dyn DecisionProvider> {
            if plan.human {
                Box::new(HumanProvider::stdio(plan.name.clone()))
            } else {
                Box::new(ScriptedProvider::new())
            }
        })
        .unwrap();

        assert_eq!(roster.len(), 5);
    }
}
