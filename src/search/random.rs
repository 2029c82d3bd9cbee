//! Uniform random move selection, the easy tier.

use rand::Rng;

use crate::board::Board;

/// Picks an empty cell uniformly at random.
///
/// Panics if the board is full; the session never asks a strategy to move
/// in a terminal position.
pub fn random_move(board: &Board, rng: &mut impl Rng) -> usize {
    let empty = board.empty_cells();
    assert!(!empty.is_empty(), "move requested on a full board");
    empty[rng.gen_range(0..empty.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Mark;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn only_returns_empty_cells() {
        let mut board = Board::empty();
        board.place(0, Mark::X);
        board.place(4, Mark::O);
        board.place(8, Mark::X);

        let mut rng = SmallRng::seed_from_u64(12);
        for _ in 0..200 {
            let index = random_move(&board, &mut rng);
            assert_eq!(board.mark_at(index), Mark::Empty);
        }
    }

    #[test]
    fn single_empty_cell_is_forced() {
        let mut board = Board::empty();
        for i in 0..8 {
            board.place(i, if i % 2 == 0 { Mark::X } else { Mark::O });
        }
        let mut rng = SmallRng::seed_from_u64(7);
        assert_eq!(random_move(&board, &mut rng), 8);
    }

    #[test]
    #[should_panic(expected = "full board")]
    fn full_board_panics() {
        let mut board = Board::empty();
        for i in 0..9 {
            board.place(i, if i % 2 == 0 { Mark::X } else { Mark::O });
        }
        let mut rng = SmallRng::seed_from_u64(3);
        random_move(&board, &mut rng);
    }
}
