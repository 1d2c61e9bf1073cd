//! Wire-level scenarios
//!
//! Each scenario feeds a sequence of JSON moves through a `Session`, the way
//! the turn-sequencing host does, and checks the resulting position. When a
//! scenario names an error, its last move must be rejected with that error
//! and leave the session exactly as it was before.

use pylos_core::{PylosError, SearchConfig, Session};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct Scenario {
    name: String,
    /// Move objects, or raw strings sent verbatim
    moves: Vec<Value>,
    #[serde(default)]
    error: Option<String>,
    reserves: [u8; 2],
    turn: String,
    occupied: u32,
}

const SCENARIOS: &str = r#"[
  {
    "name": "opening placement",
    "moves": [{"move": "place", "to": [0, 0, 0]}],
    "reserves": [14, 15], "turn": "Dark", "occupied": 1
  },
  {
    "name": "placement on an empty base",
    "moves": [{"move": "place", "to": [1, 0, 0]}],
    "error": "Unsupported",
    "reserves": [15, 15], "turn": "Light", "occupied": 0
  },
  {
    "name": "placement on an occupied cell",
    "moves": [
      {"move": "place", "to": [0, 0, 0]},
      {"move": "place", "to": [0, 0, 0]}
    ],
    "error": "CellOccupied",
    "reserves": [14, 15], "turn": "Dark", "occupied": 1
  },
  {
    "name": "square completed and two spheres taken back",
    "moves": [
      {"move": "place", "to": [0, 0, 0]},
      {"move": "place", "to": [0, 3, 3]},
      {"move": "place", "to": [0, 0, 1]},
      {"move": "place", "to": [0, 3, 2]},
      {"move": "place", "to": [0, 1, 0]},
      {"move": "place", "to": [0, 3, 1]},
      {"move": "place", "to": [0, 1, 1], "remove": [[0, 0, 0], [0, 1, 1]]}
    ],
    "reserves": [13, 12], "turn": "Dark", "occupied": 5
  },
  {
    "name": "square completed with an empty removal list",
    "moves": [
      {"move": "place", "to": [0, 0, 0]},
      {"move": "place", "to": [0, 3, 3]},
      {"move": "place", "to": [0, 0, 1]},
      {"move": "place", "to": [0, 3, 2]},
      {"move": "place", "to": [0, 1, 0]},
      {"move": "place", "to": [0, 3, 1]},
      {"move": "place", "to": [0, 1, 1], "remove": []}
    ],
    "reserves": [11, 12], "turn": "Dark", "occupied": 7
  },
  {
    "name": "empty removal list without a square",
    "moves": [{"move": "place", "to": [0, 0, 0], "remove": []}],
    "error": "NoSquareFormed",
    "reserves": [15, 15], "turn": "Light", "occupied": 0
  },
  {
    "name": "taking back an opponent sphere",
    "moves": [
      {"move": "place", "to": [0, 0, 0]},
      {"move": "place", "to": [0, 3, 3]},
      {"move": "place", "to": [0, 0, 1]},
      {"move": "place", "to": [0, 3, 2]},
      {"move": "place", "to": [0, 1, 0]},
      {"move": "place", "to": [0, 3, 1]},
      {"move": "place", "to": [0, 1, 1], "remove": [[0, 3, 3]]}
    ],
    "error": "NotOwned",
    "reserves": [12, 12], "turn": "Light", "occupied": 6
  },
  {
    "name": "removal without a square",
    "moves": [{"move": "place", "to": [0, 0, 0], "remove": [[0, 0, 0]]}],
    "error": "NoSquareFormed",
    "reserves": [15, 15], "turn": "Light", "occupied": 0
  },
  {
    "name": "relocation onto a mixed square",
    "moves": [
      {"move": "place", "to": [0, 0, 0]},
      {"move": "place", "to": [0, 0, 1]},
      {"move": "place", "to": [0, 1, 0]},
      {"move": "place", "to": [0, 1, 1]},
      {"move": "place", "to": [0, 3, 3]},
      {"move": "place", "to": [0, 3, 0]},
      {"move": "move", "from": [0, 3, 3], "to": [1, 0, 0]}
    ],
    "reserves": [12, 12], "turn": "Dark", "occupied": 6
  },
  {
    "name": "relocating a supporting sphere",
    "moves": [
      {"move": "place", "to": [0, 0, 0]},
      {"move": "place", "to": [0, 0, 1]},
      {"move": "place", "to": [0, 1, 0]},
      {"move": "place", "to": [0, 1, 1]},
      {"move": "place", "to": [1, 0, 0]},
      {"move": "place", "to": [0, 3, 3]},
      {"move": "move", "from": [0, 0, 0], "to": [1, 1, 1]}
    ],
    "error": "Pinned",
    "reserves": [12, 12], "turn": "Light", "occupied": 6
  },
  {
    "name": "relocation within a layer",
    "moves": [
      {"move": "place", "to": [0, 0, 0]},
      {"move": "place", "to": [0, 3, 3]},
      {"move": "move", "from": [0, 0, 0], "to": [0, 2, 2]}
    ],
    "error": "IllegalDirection",
    "reserves": [14, 14], "turn": "Light", "occupied": 2
  },
  {
    "name": "relocation from an empty cell",
    "moves": [{"move": "move", "from": [0, 2, 2], "to": [1, 0, 0]}],
    "error": "CellEmpty",
    "reserves": [15, 15], "turn": "Light", "occupied": 0
  },
  {
    "name": "unreadable text",
    "moves": ["{\"move\": \"place\", \"to\": "],
    "error": "MalformedMoveText",
    "reserves": [15, 15], "turn": "Light", "occupied": 0
  },
  {
    "name": "placement with a source",
    "moves": [{"move": "place", "from": [0, 0, 0], "to": [0, 0, 1]}],
    "error": "MalformedMoveText",
    "reserves": [15, 15], "turn": "Light", "occupied": 0
  },
  {
    "name": "coordinate off the pyramid",
    "moves": [{"move": "place", "to": [2, 2, 0]}],
    "error": "OutOfBounds",
    "reserves": [15, 15], "turn": "Light", "occupied": 0
  },
  {
    "name": "three removals without a square",
    "moves": [{"move": "place", "to": [0, 0, 0], "remove": [[0, 0, 0], [0, 0, 1], [0, 0, 2]]}],
    "error": "NoSquareFormed",
    "reserves": [15, 15], "turn": "Light", "occupied": 0
  },
  {
    "name": "three removals after a square",
    "moves": [
      {"move": "place", "to": [0, 0, 0]},
      {"move": "place", "to": [0, 3, 3]},
      {"move": "place", "to": [0, 0, 1]},
      {"move": "place", "to": [0, 3, 2]},
      {"move": "place", "to": [0, 1, 0]},
      {"move": "place", "to": [0, 3, 1]},
      {"move": "place", "to": [0, 1, 1], "remove": [[0, 0, 0], [0, 0, 1], [0, 1, 1]]}
    ],
    "error": "TooManyRemovals",
    "reserves": [12, 12], "turn": "Light", "occupied": 6
  }
]"#;

fn error_kind(error: &PylosError) -> &'static str {
    match error {
        PylosError::OutOfBounds(_) => "OutOfBounds",
        PylosError::CellOccupied(_) => "CellOccupied",
        PylosError::Unsupported(_) => "Unsupported",
        PylosError::CellEmpty(_) => "CellEmpty",
        PylosError::NotOwned(..) => "NotOwned",
        PylosError::Pinned(_) => "Pinned",
        PylosError::IllegalDirection { .. } => "IllegalDirection",
        PylosError::EmptyReserve(_) => "EmptyReserve",
        PylosError::NoSquareFormed(_) => "NoSquareFormed",
        PylosError::TooManyRemovals(_) => "TooManyRemovals",
        PylosError::MalformedMoveText(_) => "MalformedMoveText",
        PylosError::NoLegalMoves(_) => "NoLegalMoves",
    }
}

fn raw_text(value: &Value) -> String {
    match value {
        Value::String(raw) => raw.clone(),
        other => other.to_string(),
    }
}

/// Play a scenario, returning a description of each mismatch.
fn run(scenario: &Scenario) -> Vec<String> {
    let mut errors = Vec::new();
    let mut session = Session::new(SearchConfig::default());
    let (last, accepted) = match scenario.moves.split_last() {
        Some(split) => split,
        None => return vec!["no moves".to_string()],
    };

    for (i, mov) in accepted.iter().enumerate() {
        if let Err(e) = session.apply_incoming_move(&raw_text(mov)) {
            errors.push(format!("move {} rejected: {}", i, e));
            return errors;
        }
    }

    let before = *session.state();
    match (session.apply_incoming_move(&raw_text(last)), scenario.error.as_deref()) {
        (Ok(()), None) => {}
        (Ok(()), Some(expected)) => errors.push(format!("expected {}, last move accepted", expected)),
        (Err(e), None) => errors.push(format!("last move rejected: {}", e)),
        (Err(e), Some(expected)) => {
            if error_kind(&e) != expected {
                errors.push(format!("expected {}, got {:?}", expected, e));
            }
            if *session.state() != before {
                errors.push("rejected move changed the state".to_string());
            }
        }
    }

    let state = session.state();
    if state.reserves() != scenario.reserves {
        errors.push(format!("reserves {:?}, expected {:?}", state.reserves(), scenario.reserves));
    }
    if state.turn().name() != scenario.turn {
        errors.push(format!("{} to play, expected {}", state.turn().name(), scenario.turn));
    }
    if state.board().occupied() != scenario.occupied {
        errors.push(format!(
            "{} cells occupied, expected {}",
            state.board().occupied(),
            scenario.occupied
        ));
    }
    errors
}

#[test]
fn test_wire_scenarios() {
    let scenarios: Vec<Scenario> = serde_json::from_str(SCENARIOS).expect("Failed to parse scenarios");

    let mut failures: Vec<String> = Vec::new();
    for scenario in &scenarios {
        let errors = run(scenario);
        if !errors.is_empty() {
            failures.push(format!("{}:\n  {}", scenario.name, errors.join("\n  ")));
        }
    }

    println!("{}/{} scenarios passed", scenarios.len() - failures.len(), scenarios.len());
    for f in &failures {
        println!("\n{}", f);
    }
    assert!(failures.is_empty(), "{} scenarios failed", failures.len());
}

#[test]
fn test_local_moves_replay_through_the_wire() {
    let mut session = Session::new(SearchConfig { depth: 1 });
    for _ in 0..12 {
        if session.winner().is_some() {
            break;
        }
        let text = session.request_local_move().unwrap();
        session.apply_incoming_move(&text).unwrap();
    }
    let [light, dark] = session.state().reserves();
    assert_eq!(light as u32 + dark as u32 + session.state().board().occupied(), 30);
}
