use common::games::tictactoe::{GameMode, Mark, Outcome};

fn player_number(mark: Mark) -> u8 {
    match mark {
        Mark::X => 1,
        Mark::O => 2,
    }
}

pub fn turn_label(mode: GameMode, mark: Mark) -> String {
    if mode.computer_mark() == Some(mark) {
        format!("PC ({})", mark)
    } else {
        format!("Player {} ({})", player_number(mark), mark)
    }
}

pub fn outcome_label(mode: GameMode, outcome: Outcome) -> Option<String> {
    match outcome {
        Outcome::InProgress => None,
        Outcome::Draw => Some("Oops, It's a Draw!".to_string()),
        Outcome::Win(mark) if mode.computer_mark() == Some(mark) => Some("PC Wins!".to_string()),
        Outcome::Win(mark) => Some(format!("Player {} Wins!", player_number(mark))),
    }
}
