//! Game tree construction and per-ply position queries

use std::collections::{BTreeMap, VecDeque};

use log::{debug, trace};
use super::board::{Board, Move, Player};

/// Index of a node in the [`Games`] arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

/// One position in the game tree
#[derive(Debug, Clone)]
pub struct Node {
    board: Board,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    last_move: Option<Move>,
}

impl Node {
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// `None` for the root
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Children in the order of the parent's legal moves
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// The move that led from the parent to this node
    pub fn last_move(&self) -> Option<&Move> {
        self.last_move.as_ref()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// The complete Hexapawn game tree.
///
/// Every non-terminal position is expanded with one child per legal move
/// until each branch ends in a terminal position. Nodes live in an arena
/// and are never modified once the tree is built.
#[derive(Debug, Clone)]
pub struct Games {
    nodes: Vec<Node>,
}

/// Summary counts over a built tree
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeStats {
    pub nodes: usize,
    pub terminal: usize,
    pub white_wins: usize,
    pub black_wins: usize,
    pub max_ply: u32,
    pub nodes_per_ply: BTreeMap<u32, usize>,
}

impl Games {
    /// Build the tree rooted at the starting position
    pub fn new() -> Self {
        Self::from_root(Board::new())
    }

    /// Build the tree rooted at an arbitrary position
    pub fn from_root(root: Board) -> Self {
        let mut nodes = vec![Node {
            board: root,
            parent: None,
            children: Vec::new(),
            last_move: None,
        }];
        let mut pending = vec![NodeId(0)];

        while let Some(id) = pending.pop() {
            let board = &nodes[id.0].board;
            if board.is_terminal() {
                continue;
            }

            let children: Vec<Node> = board
                .legal_moves()
                .into_iter()
                .map(|mv| Node {
                    board: board.apply(&mv),
                    parent: Some(id),
                    children: Vec::new(),
                    last_move: Some(mv),
                })
                .collect();
            trace!("expanding node {} with {} children", id.0, children.len());

            for child in children {
                let child_id = NodeId(nodes.len());
                nodes.push(child);
                nodes[id.0].children.push(child_id);
                pending.push(child_id);
            }
        }

        debug!("built game tree with {} nodes", nodes.len());
        Games { nodes }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Look up a node.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not produced by this tree.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes in creation order
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (NodeId(index), node))
    }

    /// Terminal nodes in creation order
    pub fn leaves(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes().filter(|(_, node)| node.is_leaf())
    }

    /// Highest ply number reached anywhere in the tree
    pub fn depth(&self) -> u32 {
        self.nodes
            .iter()
            .map(|node| node.board.ply())
            .max()
            .unwrap_or(0)
    }

    /// Node ids from `id` up to and including the root
    pub fn path_to_root(&self, id: NodeId) -> Vec<NodeId> {
        let mut path = vec![id];
        let mut current = id;
        while let Some(parent) = self.node(current).parent {
            path.push(parent);
            current = parent;
        }
        path
    }

    /// Node ids in breadth-first order, siblings left to right
    pub fn level_order(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut queue = VecDeque::from([self.root()]);

        while let Some(id) = queue.pop_front() {
            order.push(id);
            queue.extend(self.node(id).children.iter().copied());
        }

        order
    }

    /// Every position where `player` is to move, bucketed by ply number.
    ///
    /// Buckets follow level order. Positions reached along different
    /// paths appear once per path; no deduplication happens here.
    pub fn all_player_positions(&self, player: Player) -> BTreeMap<u32, Vec<&Board>> {
        let mut positions: BTreeMap<u32, Vec<&Board>> = BTreeMap::new();

        for id in self.level_order() {
            let board = &self.node(id).board;
            if board.turn() == player {
                positions.entry(board.ply()).or_default().push(board);
            }
        }

        positions
    }

    pub fn stats(&self) -> TreeStats {
        let mut stats = TreeStats {
            nodes: self.nodes.len(),
            max_ply: self.depth(),
            ..TreeStats::default()
        };

        for node in &self.nodes {
            *stats.nodes_per_ply.entry(node.board.ply()).or_default() += 1;
            match node.board.winner() {
                Some(Player::White) => stats.white_wins += 1,
                Some(Player::Black) => stats.black_wins += 1,
                None => {}
            }
        }
        stats.terminal = stats.white_wins + stats.black_wins;

        stats
    }
}

impl Default for Games {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hexapawn::MAX_PLY;

    #[test]
    fn root_holds_starting_position() {
        let games = Games::new();
        let root = games.node(games.root());
        assert_eq!(root.board(), &Board::new());
        assert!(root.parent().is_none());
        assert!(root.last_move().is_none());
        assert_eq!(root.children().len(), 2);
    }

    #[test]
    fn children_follow_legal_move_order() {
        let games = Games::new();
        for (id, node) in games.nodes() {
            let moves = node.board().legal_moves();
            if node.board().is_terminal() {
                assert!(node.is_leaf());
                continue;
            }
            assert_eq!(node.children().len(), moves.len());
            for (child_id, mv) in node.children().iter().zip(&moves) {
                let child = games.node(*child_id);
                assert_eq!(child.parent(), Some(id));
                assert_eq!(child.last_move(), Some(mv));
                assert_eq!(child.board(), &node.board().make_move(mv).unwrap());
            }
        }
    }

    #[test]
    fn tree_has_expected_shape() {
        let stats = Games::new().stats();
        assert_eq!(stats.nodes, 125);
        assert_eq!(stats.terminal, 65);
        assert_eq!(stats.white_wins, 30);
        assert_eq!(stats.black_wins, 35);
        assert_eq!(stats.max_ply, MAX_PLY);
        assert_eq!(
            stats.nodes_per_ply.into_iter().collect::<Vec<_>>(),
            vec![(1, 1), (2, 2), (3, 5), (4, 14), (5, 28), (6, 35), (7, 32), (8, 8)]
        );
    }

    #[test]
    fn level_order_visits_every_node_once_by_ply() {
        let games = Games::new();
        let order = games.level_order();
        assert_eq!(order.len(), games.len());

        let plies: Vec<u32> = order.iter().map(|id| games.node(*id).board().ply()).collect();
        assert!(plies.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn path_to_root_walks_parents() {
        let games = Games::new();
        for (id, node) in games.leaves() {
            let path = games.path_to_root(id);
            assert_eq!(path.first(), Some(&id));
            assert_eq!(path.last(), Some(&games.root()));
            assert_eq!(path.len() as u32, node.board().ply());
        }
    }

    #[test]
    fn player_positions_are_bucketed_by_ply() {
        let games = Games::new();
        let white = games.all_player_positions(Player::White);
        let sizes: Vec<(u32, usize)> = white.iter().map(|(ply, b)| (*ply, b.len())).collect();
        assert_eq!(sizes, vec![(1, 1), (3, 5), (5, 28), (7, 32)]);

        let black = games.all_player_positions(Player::Black);
        let sizes: Vec<(u32, usize)> = black.iter().map(|(ply, b)| (*ply, b.len())).collect();
        assert_eq!(sizes, vec![(2, 2), (4, 14), (6, 35), (8, 8)]);

        for (ply, boards) in white.iter().chain(black.iter()) {
            for board in boards {
                assert_eq!(board.ply(), *ply);
            }
        }
    }

    fn encoded(boards: &[&Board]) -> Vec<String> {
        boards.iter().map(|board| board.encode()).collect()
    }

    #[test]
    fn player_positions_follow_level_order() {
        let games = Games::new();
        let white = games.all_player_positions(Player::White);
        assert_eq!(
            encoded(&white[&3]),
            vec![
                "B.B/WB./.WW_W_3",
                "B.B/B../.WW_W_3",
                "BB./W.B/.WW_W_3",
                ".BB/BW./W.W_W_3",
                ".BB/.B./W.W_W_3",
            ]
        );

        let black = games.all_player_positions(Player::Black);
        assert_eq!(
            encoded(&black[&2]),
            vec!["BBB/W../.WW_B_2", "BBB/.W./W.W_B_2"]
        );

        for player in Player::all() {
            let positions = games.all_player_positions(player);
            for (ply, boards) in &positions {
                let expected: Vec<&Board> = games
                    .level_order()
                    .into_iter()
                    .map(|id| games.node(id).board())
                    .filter(|board| board.turn() == player && board.ply() == *ply)
                    .collect();
                assert_eq!(boards.len(), expected.len());
                for (board, other) in boards.iter().zip(&expected) {
                    assert!(std::ptr::eq(*board, *other), "bucket {ply} out of order");
                }
            }
        }
    }

    #[test]
    fn terminal_root_is_a_single_leaf() {
        let board = Board::from_pawns(
            [crate::hexapawn::Pawn::new(Player::White, 1, 1)],
            Player::Black,
            4,
        )
        .unwrap();
        let games = Games::from_root(board);
        assert_eq!(games.len(), 1);
        assert_eq!(games.leaves().count(), 1);
    }
}
