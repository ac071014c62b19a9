use hexapawn::hexapawn::{Board, Games, Move, Pawn, Player};

fn reachable_boards() -> Vec<Board> {
    Games::new()
        .nodes()
        .map(|(_, node)| node.board().clone())
        .collect()
}

#[test]
fn legal_moves_stay_on_board_and_never_hit_own_pawns() {
    for board in reachable_boards() {
        for mv in board.legal_moves() {
            assert!(Board::valid_position(mv.x, mv.y));
            assert_eq!(mv.pawn.owner, board.turn());
            assert_eq!(mv.y - mv.pawn.y, board.turn().direction());

            match board.space(mv.x, mv.y) {
                None => assert!(!mv.is_capture(), "diagonal move onto empty square"),
                Some(target) => {
                    assert!(mv.is_capture(), "forward move onto occupied square");
                    assert_eq!(target.owner, board.turn().opponent());
                }
            }
        }
    }
}

#[test]
fn mirroring_commutes_with_moves() {
    for board in reachable_boards() {
        for mv in board.legal_moves() {
            let left = board.make_move(&mv).unwrap().mirror();
            let right = board.mirror().make_move(&mv.mirror()).unwrap();
            assert_eq!(left, right, "symmetry broken for {mv} on\n{board}");
        }
    }
}

#[test]
fn applying_a_move_advances_turn_and_ply() {
    for board in reachable_boards() {
        for mv in board.legal_moves() {
            let next = board.make_move(&mv).unwrap();
            assert_eq!(next.turn(), board.turn().opponent());
            assert_eq!(next.ply(), board.ply() + 1);
            assert_eq!(next.space(mv.x, mv.y), Some(mv.pawn.at(mv.x, mv.y)));
            assert_eq!(next.space(mv.pawn.x, mv.pawn.y), None);

            let captured = usize::from(mv.is_capture());
            assert_eq!(
                next.pawns(board.turn().opponent()).len(),
                board.pawns(board.turn().opponent()).len() - captured
            );
            assert_eq!(
                next.pawns(board.turn()).len(),
                board.pawns(board.turn()).len()
            );
        }
    }
}

#[test]
fn winner_matches_its_three_conditions() {
    for board in reachable_boards() {
        let turn = board.turn();
        let opponent = turn.opponent();
        let stuck = board.legal_moves().is_empty();
        let promoted = board
            .pawns(opponent)
            .iter()
            .any(|pawn| pawn.y == opponent.goal_row());
        let wiped_out = board.pawns(turn).is_empty();

        let expected = (stuck || promoted || wiped_out).then_some(opponent);
        assert_eq!(board.winner(), expected, "wrong winner for\n{board}");
    }
}

#[test]
fn starting_position_offers_two_forward_moves() {
    let board = Board::new();
    for player in Player::all() {
        assert_eq!(board.pawns(player).len(), 3);
        assert!(
            board
                .pawns(player)
                .iter()
                .all(|pawn| pawn.y == player.home_row())
        );
    }

    let moves = board.legal_moves();
    assert_eq!(moves.len(), 2);
    assert!(moves.iter().all(|mv| !mv.is_capture()));
    assert!(moves.iter().all(|mv| mv.pawn.x != 2));
}

#[test]
fn equality_ignores_move_order() {
    let left = Pawn::new(Player::White, 0, 0);
    let centre = Pawn::new(Player::White, 1, 0);
    let black = Pawn::new(Player::Black, 2, 2);

    let play = |moves: [Move; 3]| {
        moves
            .iter()
            .try_fold(Board::new(), |board, mv| board.make_move(mv))
            .unwrap()
    };

    let one = play([
        Move::new(left, 0, 1),
        Move::new(black, 2, 1),
        Move::new(centre, 1, 1),
    ]);
    let other = play([
        Move::new(centre, 1, 1),
        Move::new(black, 2, 1),
        Move::new(left, 0, 1),
    ]);

    assert_eq!(one, other);
    assert_eq!(one.ply(), 4);

    let mut set = std::collections::HashSet::new();
    set.insert(one);
    assert!(set.contains(&other));
}
