use super::super::path::{diagonal_path, straight_path, Path};
use super::super::{Color, Coord, GameState, MoveList};

type PathFn = fn(Coord, Coord) -> Path;

/// Ray directions together with the path shape used to test blocking.
type RayFamily = (&'static [(i32, i32); 4], PathFn);

const ORTHOGONAL: RayFamily = (&[(0, 1), (0, -1), (1, 0), (-1, 0)], straight_path);
const DIAGONAL: RayFamily = (&[(1, 1), (-1, 1), (1, -1), (-1, -1)], diagonal_path);

const ROOK_RAYS: &[RayFamily] = &[ORTHOGONAL];
const BISHOP_RAYS: &[RayFamily] = &[DIAGONAL];
const QUEEN_RAYS: &[RayFamily] = &[ORTHOGONAL, DIAGONAL];

/// Type of sliding piece for move generation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SliderType {
    Bishop,
    Rook,
    Queen,
}

impl SliderType {
    const fn ray_families(self) -> &'static [RayFamily] {
        match self {
            SliderType::Rook => ROOK_RAYS,
            SliderType::Bishop => BISHOP_RAYS,
            SliderType::Queen => QUEEN_RAYS,
        }
    }
}

impl GameState {
    /// Destinations of a bishop, rook or queen on `from` moving for `colour`.
    ///
    /// Each ray is walked outward until a square whose path from `from` is
    /// not entirely empty; that square is kept only when it holds a hostile
    /// piece. Rays also stop at the board edge.
    #[must_use]
    pub fn generate_slider_moves(&self, from: Coord, slider: SliderType, colour: Color) -> MoveList {
        let mut moves = MoveList::new();
        if !from.check_bounds() {
            return moves;
        }
        for &(rays, path) in slider.ray_families() {
            for &step in rays {
                self.walk_ray(from, step, path, colour, &mut moves);
            }
        }
        moves
    }

    #[must_use]
    pub fn generate_rook_moves(&self, from: Coord, colour: Color) -> MoveList {
        self.generate_slider_moves(from, SliderType::Rook, colour)
    }

    #[must_use]
    pub fn generate_bishop_moves(&self, from: Coord, colour: Color) -> MoveList {
        self.generate_slider_moves(from, SliderType::Bishop, colour)
    }

    #[must_use]
    pub fn generate_queen_moves(&self, from: Coord, colour: Color) -> MoveList {
        self.generate_slider_moves(from, SliderType::Queen, colour)
    }

    fn walk_ray(
        &self,
        from: Coord,
        step: (i32, i32),
        path: PathFn,
        colour: Color,
        moves: &mut MoveList,
    ) {
        let mut candidate = from + step;
        while candidate.check_bounds() {
            if path(from, candidate).all(|sq| self.empty_space(sq)) {
                moves.push(candidate);
                candidate = candidate + step;
            } else {
                if self.is_hostile_target(candidate, colour) {
                    moves.push(candidate);
                }
                break;
            }
        }
    }
}
