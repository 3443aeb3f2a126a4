#[cfg(test)]
mod tests {
    use crate::archetypes::*;
    use crate::commands::PlayerCommand;
    use crate::components::{Combatant, Health};
    use crate::enums::*;
    use crate::error::{PlacementError, RulesError};
    use crate::events::MatchEvent;
    use crate::rules::MatchRules;
    use crate::state::MatchSnapshot;
    use crate::types::{Position, SimTime};

    /// Verify PlayerCommand round-trips through serde (tagged union).
    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::PlaceUnit {
                archetype_id: 3,
                x: 250.0,
                y: 500.0,
            },
            PlayerCommand::PlaceSelected { x: 300.0, y: 500.0 },
            PlayerCommand::SelectArchetype { archetype_id: 2 },
            PlayerCommand::TogglePause,
            PlayerCommand::Restart,
            PlayerCommand::SetTimeScale { scale: 2.0 },
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            assert_eq!(*cmd, back);
        }
    }

    #[test]
    fn test_player_command_wire_shape() {
        let json = r#"{"type":"PlaceUnit","archetype_id":1,"x":200.0,"y":500.0}"#;
        let cmd: PlayerCommand = serde_json::from_str(json).unwrap();
        assert_eq!(
            cmd,
            PlayerCommand::PlaceUnit {
                archetype_id: 1,
                x: 200.0,
                y: 500.0
            }
        );
    }

    /// Every event variant must serialize, including the nested error and kind.
    #[test]
    fn test_match_event_serde() {
        let events = vec![
            MatchEvent::UnitDeployed {
                unit_id: 4,
                kind: UnitKind::Attacker(AttackerArchetype::Hornet),
                x: 200.0,
                y: 500.0,
                cost: 50,
            },
            MatchEvent::PlacementRejected {
                error: PlacementError::InvalidArchetype(9),
            },
            MatchEvent::PlacementRejected {
                error: PlacementError::InsufficientResource {
                    cost: 40,
                    available: 20,
                },
            },
            MatchEvent::PlacementRejected {
                error: PlacementError::MatchNotRunning,
            },
            MatchEvent::UnitKilled {
                unit_id: 7,
                kind: UnitKind::Defender(DefenderArchetype::Radiance),
                bounty: 14,
            },
            MatchEvent::WaveCleared {
                wave: 4,
                structure_health: 700,
            },
            MatchEvent::MatchRestarted,
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let back: MatchEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(*event, back);
        }
    }

    #[test]
    fn test_snapshot_serde() {
        let snapshot = MatchSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: MatchSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.time, back.time);
        assert_eq!(snapshot.phase, back.phase);
        assert!(
            json.len() < 1024,
            "Empty snapshot should be <1KB, was {} bytes",
            json.len()
        );
    }

    // ---- Archetype catalog ----

    #[test]
    fn test_attacker_costs() {
        let costs: Vec<u32> = AttackerArchetype::ALL
            .iter()
            .map(|a| a.descriptor().cost)
            .collect();
        assert_eq!(costs, vec![30, 40, 50, 70]);
    }

    #[test]
    fn test_attacker_ids_round_trip() {
        for archetype in AttackerArchetype::ALL {
            assert_eq!(AttackerArchetype::from_id(archetype.id()), Ok(archetype));
        }
    }

    #[test]
    fn test_invalid_attacker_id() {
        assert_eq!(
            AttackerArchetype::from_id(0),
            Err(PlacementError::InvalidArchetype(0))
        );
        assert_eq!(
            AttackerArchetype::from_id(5),
            Err(PlacementError::InvalidArchetype(5))
        );
    }

    #[test]
    fn test_attacker_stats_not_wave_scaled() {
        let knight = AttackerArchetype::Knight.descriptor();
        assert_eq!(knight.scaled_stats(10), knight.base_stats());
        assert_eq!(knight.base_stats().health, 80);
        assert_eq!(knight.base_stats().speed, crate::constants::ATTACKER_SPEED);
    }

    #[test]
    fn test_defender_wave_scaling() {
        let husk = DefenderArchetype::Husk.descriptor().scaled_stats(3);
        assert_eq!(husk.health, 75);
        assert_eq!(husk.damage, 26);
        assert_eq!(husk.attack_rate, 1.0);
        assert_eq!(husk.engagement_radius, 50.0);

        let radiance = DefenderArchetype::Radiance.descriptor().scaled_stats(2);
        assert_eq!(radiance.health, 220);
        assert_eq!(radiance.damage, 50);
        assert_eq!(radiance.speed, crate::constants::DEFENDER_SPEED);
    }

    #[test]
    fn test_defender_roll_fallback() {
        assert_eq!(DefenderArchetype::from_roll(1), DefenderArchetype::Husk);
        assert_eq!(DefenderArchetype::from_roll(4), DefenderArchetype::Radiance);
        assert_eq!(DefenderArchetype::from_roll(0), DefenderArchetype::Husk);
        assert_eq!(DefenderArchetype::from_roll(99), DefenderArchetype::Husk);
    }

    #[test]
    fn test_defender_choice_count_widens_and_caps() {
        assert_eq!(defender_choice_count(1), 1);
        assert_eq!(defender_choice_count(2), 1);
        assert_eq!(defender_choice_count(3), 2);
        assert_eq!(defender_choice_count(6), 3);
        assert_eq!(defender_choice_count(9), 4);
        assert_eq!(defender_choice_count(50), 4);
    }

    #[test]
    fn test_unit_kind_faction() {
        assert_eq!(
            UnitKind::Attacker(AttackerArchetype::Knight).faction(),
            Faction::Attacker
        );
        assert_eq!(
            UnitKind::Defender(DefenderArchetype::Husk).faction(),
            Faction::Defender
        );
        assert_eq!(Faction::Attacker.opponent(), Faction::Defender);
    }

    // ---- Components ----

    #[test]
    fn test_health_clamps_at_zero() {
        let mut health = Health::full(10);
        assert!(health.apply_damage(15));
        assert_eq!(health.current, 0);
        // Already dead: further damage does not report a second kill.
        assert!(!health.apply_damage(5));
        assert_eq!(health.current, 0);
    }

    #[test]
    fn test_health_restore_caps_at_max() {
        let mut health = Health { current: 498, max: 500 };
        health.restore(1);
        assert_eq!(health.current, 499);
        health.restore(10);
        assert_eq!(health.current, 500);
    }

    #[test]
    fn test_combatant_attack_interval() {
        let stats = AttackerArchetype::Warden.descriptor().base_stats();
        let combatant = Combatant::from_stats(&stats);
        assert!((combatant.attack_interval() - 0.5).abs() < 1e-12);
        assert_eq!(combatant.cooldown_secs, 0.0);
    }

    // ---- Rules ----

    #[test]
    fn test_rules_defaults() {
        let rules = MatchRules::default();
        assert_eq!(rules.initial_resources, 100);
        assert_eq!(rules.max_resources, 200);
        assert_eq!(rules.difficulty, Difficulty::Normal);
        assert!(rules.validate().is_ok());
    }

    #[test]
    fn test_rules_partial_json() {
        let rules =
            MatchRules::from_json_str(r#"{"initial_resources": 150, "difficulty": "hard"}"#)
                .unwrap();
        assert_eq!(rules.initial_resources, 150);
        assert_eq!(rules.difficulty, Difficulty::Hard);
        assert_eq!(rules.max_resources, 200);
    }

    #[test]
    fn test_rules_rejects_bad_values() {
        let err = MatchRules::from_json_str(r#"{"initial_resources": 500}"#).unwrap_err();
        assert!(matches!(err, RulesError::Invalid(_)));

        let err = MatchRules::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, RulesError::Json(_)));
    }

    #[test]
    fn test_spawn_interval_shrinks_and_floors() {
        let rules = MatchRules::default();
        assert!((rules.spawn_interval(1) - 2.9).abs() < 1e-9);
        assert!((rules.spawn_interval(10) - 2.0).abs() < 1e-9);
        assert!((rules.spawn_interval(15) - 1.5).abs() < 1e-9);
        assert!((rules.spawn_interval(40) - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_hard_difficulty_spawns_faster() {
        let rules = MatchRules {
            difficulty: Difficulty::Hard,
            ..Default::default()
        };
        assert!(rules.spawn_interval(1) < MatchRules::default().spawn_interval(1));
        assert!(rules.effective_regen_per_sec() < 20.0);
    }

    #[test]
    fn test_spawn_interval_floor_holds_on_every_difficulty() {
        let hard = MatchRules {
            difficulty: Difficulty::Hard,
            ..Default::default()
        };
        assert!((hard.spawn_interval(1) - 2.9 / 1.5).abs() < 1e-9);
        assert!((hard.spawn_interval(15) - 1.5).abs() < 1e-9);
        assert!((hard.spawn_interval(40) - 1.5).abs() < 1e-9);

        let easy = MatchRules {
            difficulty: Difficulty::Easy,
            ..Default::default()
        };
        assert!((easy.spawn_interval(40) - 1.5 / 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_defender_structure_health_by_wave() {
        let rules = MatchRules::default();
        assert_eq!(rules.defender_structure_health_for(1), 300);
        assert_eq!(rules.defender_structure_health_for(4), 700);
    }

    #[test]
    fn test_placement_error_messages() {
        assert_eq!(
            PlacementError::InsufficientResource {
                cost: 40,
                available: 20
            }
            .to_string(),
            "insufficient resources: need 40, have 20"
        );
        assert_eq!(
            PlacementError::InvalidArchetype(7).to_string(),
            "unknown archetype id 7"
        );
        assert_eq!(
            PlacementError::NonFinitePosition.to_string(),
            "placement coordinates must be finite"
        );
    }

    // ---- Geometry ----

    #[test]
    fn test_position_distance() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..4 {
            time.advance(0.25);
        }
        assert_eq!(time.tick, 4);
        assert!((time.elapsed_secs - 1.0).abs() < 1e-10);
    }
}
