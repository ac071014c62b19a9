//! Board state representation and the Hexapawn rules

use std::{cmp::Ordering, collections::BTreeSet, fmt};

use serde::{Deserialize, Serialize};

/// Linear dimension of the board
pub const SIZE: i8 = 3;

/// Highest ply number any game can reach.
///
/// A pawn that steps onto the far row ends the game, so each side makes at
/// most three advances from its home row plus one winning move.
pub const MAX_PLY: u32 = 8;

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Moves first, starts on row 0 and advances towards row 2
    White,
    /// Moves second, starts on row 2 and advances towards row 0
    Black,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }

    /// Both players, first mover first
    pub fn all() -> [Player; 2] {
        [Player::White, Player::Black]
    }

    /// Row the player's pawns start on
    pub fn home_row(self) -> i8 {
        match self {
            Player::White => 0,
            Player::Black => SIZE - 1,
        }
    }

    /// Row the player has to reach to win
    pub fn goal_row(self) -> i8 {
        self.opponent().home_row()
    }

    /// Row delta of a single step forward
    pub fn direction(self) -> i8 {
        match self {
            Player::White => 1,
            Player::Black => -1,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Player::White => 'W',
            Player::Black => 'B',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Player::White => "White",
            Player::Black => "Black",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single pawn. Pawns carry no identity beyond their fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pawn {
    pub owner: Player,
    pub x: i8,
    pub y: i8,
}

impl Pawn {
    pub fn new(owner: Player, x: i8, y: i8) -> Self {
        Pawn { owner, x, y }
    }

    /// The same pawn relocated to `(x, y)`
    pub fn at(self, x: i8, y: i8) -> Self {
        Pawn { x, y, ..self }
    }
}

// Column first so that iterating a pawn set walks the board left to right.
impl Ord for Pawn {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.x, self.y, self.owner).cmp(&(other.x, other.y, other.owner))
    }
}

impl PartialOrd for Pawn {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A candidate relocation of `pawn` to `(x, y)`.
///
/// Only meaningful relative to the board that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub pawn: Pawn,
    pub x: i8,
    pub y: i8,
}

impl Move {
    pub fn new(pawn: Pawn, x: i8, y: i8) -> Self {
        Move { pawn, x, y }
    }

    pub fn origin(&self) -> (i8, i8) {
        (self.pawn.x, self.pawn.y)
    }

    pub fn target(&self) -> (i8, i8) {
        (self.x, self.y)
    }

    /// Diagonal moves are always captures
    pub fn is_capture(&self) -> bool {
        self.x != self.pawn.x
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = if self.is_capture() { 'x' } else { '-' };
        write!(
            f,
            "{}{}{}{}{}",
            column_letter(self.pawn.x),
            self.pawn.y + 1,
            separator,
            column_letter(self.x),
            self.y + 1
        )
    }
}

fn column_letter(x: i8) -> char {
    match x {
        0 => 'a',
        1 => 'b',
        2 => 'c',
        _ => '?',
    }
}

/// A single position: pawn placement, side to move and ply counter.
///
/// Boards are values. Every rule operation returns a new board and leaves
/// the receiver untouched. Equality and hashing cover exactly the pawn sets,
/// the side to move and the ply number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BoardRepr")]
pub struct Board {
    pub(super) white: BTreeSet<Pawn>,
    pub(super) black: BTreeSet<Pawn>,
    pub(super) turn: Player,
    pub(super) ply: u32,
}

/// Unchecked serialized form of [`Board`], validated on the way in
#[derive(Deserialize)]
struct BoardRepr {
    white: Vec<Pawn>,
    black: Vec<Pawn>,
    turn: Player,
    ply: u32,
}

impl TryFrom<BoardRepr> for Board {
    type Error = crate::Error;

    fn try_from(repr: BoardRepr) -> Result<Self, Self::Error> {
        for (player, pawns) in [(Player::White, &repr.white), (Player::Black, &repr.black)] {
            if let Some(pawn) = pawns.iter().find(|pawn| pawn.owner != player) {
                return Err(crate::Error::InvalidBoard {
                    message: format!("{} pawn listed with {player}", pawn.owner),
                });
            }
        }
        Board::from_pawns(repr.white.into_iter().chain(repr.black), repr.turn, repr.ply)
    }
}

impl Board {
    /// Starting position: three pawns per side on their home rows, White to move
    pub fn new() -> Self {
        let home = |player: Player| -> BTreeSet<Pawn> {
            (0..SIZE)
                .map(|x| Pawn::new(player, x, player.home_row()))
                .collect()
        };

        Board {
            white: home(Player::White),
            black: home(Player::Black),
            turn: Player::White,
            ply: 1,
        }
    }

    /// Build an arbitrary position.
    ///
    /// # Errors
    ///
    /// Returns error if a pawn is off the board, two pawns share a square,
    /// a side has more than three pawns or `ply` is zero.
    pub fn from_pawns(
        pawns: impl IntoIterator<Item = Pawn>,
        turn: Player,
        ply: u32,
    ) -> Result<Self, crate::Error> {
        let invalid = |message: String| crate::Error::InvalidBoard { message };

        if ply == 0 {
            return Err(invalid("ply numbers start at 1".to_string()));
        }

        let mut board = Board {
            white: BTreeSet::new(),
            black: BTreeSet::new(),
            turn,
            ply,
        };

        for pawn in pawns {
            if !Self::valid_position(pawn.x, pawn.y) {
                return Err(invalid(format!(
                    "{} pawn at ({}, {}) is off the board",
                    pawn.owner, pawn.x, pawn.y
                )));
            }
            if board.space(pawn.x, pawn.y).is_some() {
                return Err(invalid(format!(
                    "square ({}, {}) is occupied twice",
                    pawn.x, pawn.y
                )));
            }
            board.pawns_mut(pawn.owner).insert(pawn);
        }

        for player in Player::all() {
            let count = board.pawns(player).len();
            if count > SIZE as usize {
                return Err(invalid(format!("{player} has {count} pawns")));
            }
        }

        Ok(board)
    }

    /// Pawns of `player` in ascending column order
    pub fn pawns(&self, player: Player) -> &BTreeSet<Pawn> {
        match player {
            Player::White => &self.white,
            Player::Black => &self.black,
        }
    }

    fn pawns_mut(&mut self, player: Player) -> &mut BTreeSet<Pawn> {
        match player {
            Player::White => &mut self.white,
            Player::Black => &mut self.black,
        }
    }

    /// Side to move
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Ply number, 1 for the starting position
    pub fn ply(&self) -> u32 {
        self.ply
    }

    /// Pawn of either player on `(x, y)`; off-board squares are always empty
    pub fn space(&self, x: i8, y: i8) -> Option<Pawn> {
        self.white
            .iter()
            .chain(self.black.iter())
            .find(|pawn| pawn.x == x && pawn.y == y)
            .copied()
    }

    pub fn valid_position(x: i8, y: i8) -> bool {
        (0..SIZE).contains(&x) && (0..SIZE).contains(&y)
    }

    /// Append every geometrically possible move of `pawn`: forward step
    /// first, then the left and right diagonal captures.
    fn push_pawn_moves(&self, pawn: Pawn, moves: &mut Vec<Move>) {
        let y = pawn.y + pawn.owner.direction();

        if Self::valid_position(pawn.x, y) && self.space(pawn.x, y).is_none() {
            moves.push(Move::new(pawn, pawn.x, y));
        }

        for x in [pawn.x - 1, pawn.x + 1] {
            let target = self.space(x, y);
            if Self::valid_position(x, y)
                && target.is_some_and(|target| target.owner == pawn.owner.opponent())
            {
                moves.push(Move::new(pawn, x, y));
            }
        }
    }

    /// Legal moves for the side to move, in a fixed order: pawns by
    /// ascending column, and per pawn forward, left capture, right capture.
    ///
    /// When the position is its own mirror image the right-edge pawn is
    /// skipped, since its moves only mirror those of the left-edge pawn.
    pub fn legal_moves(&self) -> Vec<Move> {
        let skip_right_edge = self.is_self_mirror_symmetric();
        let mut moves = Vec::new();

        for &pawn in self.pawns(self.turn) {
            if skip_right_edge && pawn.x == SIZE - 1 {
                continue;
            }
            self.push_pawn_moves(pawn, &mut moves);
        }

        moves
    }

    /// Whether `mv` is a move the rules allow, ignoring the mirror pruning
    /// of [`Board::legal_moves`].
    pub fn is_legal(&self, mv: &Move) -> bool {
        if mv.pawn.owner != self.turn || !self.pawns(self.turn).contains(&mv.pawn) {
            return false;
        }

        let mut moves = Vec::with_capacity(3);
        self.push_pawn_moves(mv.pawn, &mut moves);
        moves.contains(mv)
    }

    /// Play `mv` and return the resulting board.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::WrongTurn`] if the moved pawn does not belong
    /// to the side to move, and [`crate::Error::IllegalMove`] if the rules do
    /// not allow the move.
    #[must_use = "make_move returns a new board; the original is unchanged"]
    pub fn make_move(&self, mv: &Move) -> Result<Board, crate::Error> {
        if mv.pawn.owner != self.turn {
            return Err(crate::Error::WrongTurn {
                mover: mv.pawn.owner,
                turn: self.turn,
            });
        }

        if !self.is_legal(mv) {
            return Err(crate::Error::IllegalMove {
                from: mv.origin(),
                to: mv.target(),
            });
        }

        Ok(self.apply(mv))
    }

    /// Play a move already known to be legal
    pub(super) fn apply(&self, mv: &Move) -> Board {
        let mover = mv.pawn.owner;
        let mut next = self.clone();

        let pawns = next.pawns_mut(mover);
        pawns.remove(&mv.pawn);
        pawns.insert(mv.pawn.at(mv.x, mv.y));

        next.pawns_mut(mover.opponent())
            .retain(|pawn| (pawn.x, pawn.y) != (mv.x, mv.y));
        next.turn = mover.opponent();
        next.ply += 1;
        next
    }

    /// The winner, judged from the side about to move.
    ///
    /// The opponent of the side to move has won when that side has no legal
    /// move, when the opponent already stands on its goal row, or when the
    /// side to move has no pawns left.
    pub fn winner(&self) -> Option<Player> {
        let opponent = self.turn.opponent();

        if self.legal_moves().is_empty() {
            return Some(opponent);
        }

        let goal = opponent.goal_row();
        if self.pawns(opponent).iter().any(|pawn| pawn.y == goal) {
            return Some(opponent);
        }

        if self.pawns(self.turn).is_empty() {
            return Some(opponent);
        }

        None
    }

    /// Check if the game is over
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some()
    }

    /// Compact label: rows from Black's home row down, then side and ply.
    ///
    /// The starting position encodes as `BBB/.../WWW_W_1`.
    pub fn encode(&self) -> String {
        let rows: Vec<String> = (0..SIZE)
            .rev()
            .map(|y| {
                (0..SIZE)
                    .map(|x| self.space(x, y).map_or('.', |pawn| pawn.owner.to_char()))
                    .collect()
            })
            .collect();

        format!("{}_{}_{}", rows.join("/"), self.turn.to_char(), self.ply)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..SIZE).rev() {
            for x in 0..SIZE {
                let c = self.space(x, y).map_or('.', |pawn| pawn.owner.to_char());
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        write!(f, "{} to move, ply {}", self.turn, self.ply)
    }
}
