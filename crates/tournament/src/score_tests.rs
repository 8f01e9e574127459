use super::*;

fn game(raw_score: i32, to_move: Seat) -> PlayedGame {
    PlayedGame {
        first_mover: Seat::First,
        to_move,
        plies: 12,
        final_position: Position::from_text("2bbw/bww1w/w1w1w/1w1bw/wbb1b 2458abdf").unwrap(),
        raw_score,
    }
}

#[test]
fn positive_score_goes_to_side_to_move() {
    assert_eq!(
        normalize_score(3, Seat::Second),
        Verdict::Win {
            seat: Seat::Second,
            score: 3
        }
    );
}

#[test]
fn negative_score_flips_seat_and_sign() {
    assert_eq!(
        normalize_score(-4, Seat::Second),
        Verdict::Win {
            seat: Seat::First,
            score: 4
        }
    );
    assert_eq!(
        normalize_score(-1, Seat::First),
        Verdict::Win {
            seat: Seat::Second,
            score: 1
        }
    );
}

#[test]
fn zero_is_a_draw_for_either_seat() {
    assert_eq!(normalize_score(0, Seat::First), Verdict::Draw);
    assert_eq!(normalize_score(0, Seat::Second), Verdict::Draw);
}

#[test]
fn extreme_scores_do_not_overflow() {
    assert_eq!(
        normalize_score(i32::MIN, Seat::First),
        Verdict::Win {
            seat: Seat::Second,
            score: 1u32 << 31
        }
    );
}

#[test]
fn match_result_from_draw_has_no_winner_and_zero_score() {
    let result = MatchResult::from_game(game(0, Seat::First));
    assert!(result.is_draw());
    assert_eq!(result.score, 0);
    assert_eq!(result.plies, 12);
}

#[test]
fn describe_uses_seat_labels_and_position_summary() {
    let labels = ["./minicou".to_string(), "./alphacou".to_string()];

    let win = MatchResult::from_game(game(-2, Seat::First));
    assert_eq!(win.winner, Some(Seat::Second));
    assert_eq!(win.describe(&labels), "winner ./alphacou score=2 tiles=2458abdf");

    let draw = MatchResult::from_game(game(0, Seat::Second));
    assert_eq!(draw.describe(&labels), "draw");
}
