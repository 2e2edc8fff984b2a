//! Chess piece kinds and the pieces placed on a board.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::color::{normalize_label, DEFAULT_PIECE_COLOR};
use crate::square::Square;

/// Kind tag of an empty slot or a default-constructed item.
pub const EMPTY_KIND: &str = "NONE";

/// Castle moves a rook starts with unless told otherwise.
pub const DEFAULT_CASTLE_MOVES: u32 = 3;

/// The six kinds of chess pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

impl PieceKind {
    /// All piece kinds in order.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Returns the uppercase tag used to look pieces up in a box.
    pub const fn tag(self) -> &'static str {
        match self {
            PieceKind::Pawn => "PAWN",
            PieceKind::Knight => "KNIGHT",
            PieceKind::Bishop => "BISHOP",
            PieceKind::Rook => "ROOK",
            PieceKind::Queen => "QUEEN",
            PieceKind::King => "KING",
        }
    }

    /// Single-letter symbol, as used in board diagrams.
    pub const fn symbol(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    /// Number of box slots a piece of this kind occupies.
    pub const fn width(self) -> usize {
        match self {
            PieceKind::Pawn => 1,
            PieceKind::Rook => 2,
            PieceKind::Bishop | PieceKind::Knight => 3,
            PieceKind::Queen | PieceKind::King => 4,
        }
    }

    /// Returns true if this piece is a sliding piece (bishop, rook, or queen).
    #[inline]
    pub const fn is_slider(self) -> bool {
        matches!(self, PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Error returned when a string is not a known kind tag.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown piece kind: '{0}'")]
pub struct ParseKindError(pub String);

impl FromStr for PieceKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PieceKind::ALL
            .into_iter()
            .find(|kind| kind.tag().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseKindError(s.to_string()))
    }
}

/// Kind of a piece together with the state only that kind carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Pawn { double_jump: bool },
    Knight,
    Bishop,
    Rook { castle_moves_left: u32 },
    Queen,
    King,
}

impl Role {
    /// Returns the role for `kind` with its default extra state.
    pub const fn of(kind: PieceKind) -> Self {
        match kind {
            PieceKind::Pawn => Role::Pawn { double_jump: true },
            PieceKind::Knight => Role::Knight,
            PieceKind::Bishop => Role::Bishop,
            PieceKind::Rook => Role::Rook {
                castle_moves_left: DEFAULT_CASTLE_MOVES,
            },
            PieceKind::Queen => Role::Queen,
            PieceKind::King => Role::King,
        }
    }

    pub const fn kind(self) -> PieceKind {
        match self {
            Role::Pawn { .. } => PieceKind::Pawn,
            Role::Knight => PieceKind::Knight,
            Role::Bishop => PieceKind::Bishop,
            Role::Rook { .. } => PieceKind::Rook,
            Role::Queen => PieceKind::Queen,
            Role::King => PieceKind::King,
        }
    }
}

/// A colored piece, optionally standing on a square.
///
/// Move legality lives in [`crate::movement`]; this type only carries state.
/// Positions are updated by whatever drives the game, never by the predicates.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    color: String,
    role: Role,
    position: Option<Square>,
    moving_up: bool,
}

impl Piece {
    /// Creates an unpositioned piece of `kind` with default extra state.
    ///
    /// A color that is empty or contains anything but ASCII letters becomes
    /// `"BLACK"`; otherwise it is stored uppercased.
    pub fn new(kind: PieceKind, color: &str) -> Self {
        Piece::with_role(Role::of(kind), color)
    }

    /// Creates an unpositioned piece with explicit extra state.
    pub fn with_role(role: Role, color: &str) -> Self {
        let color = normalize_label(color).unwrap_or_else(|| DEFAULT_PIECE_COLOR.to_string());
        Piece {
            color,
            role,
            position: None,
            moving_up: false,
        }
    }

    /// Creates a piece at `(row, col)` on a board of `board_length` squares a side.
    ///
    /// If either coordinate is out of range the piece is left unpositioned.
    pub fn at(kind: PieceKind, color: &str, row: i32, col: i32, board_length: usize) -> Self {
        Piece::new(kind, color).placed(Square::checked(row, col, board_length))
    }

    /// Sets the position, builder style.
    pub fn placed(mut self, position: Option<Square>) -> Self {
        self.position = position;
        self
    }

    /// Sets the movement direction, builder style.
    pub fn moving_up(mut self, moving_up: bool) -> Self {
        self.moving_up = moving_up;
        self
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn kind(&self) -> PieceKind {
        self.role.kind()
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn position(&self) -> Option<Square> {
        self.position
    }

    pub fn set_position(&mut self, position: Option<Square>) {
        self.position = position;
    }

    pub fn is_moving_up(&self) -> bool {
        self.moving_up
    }

    /// Number of box slots this piece occupies.
    pub fn width(&self) -> usize {
        self.kind().width()
    }

    /// Returns true if both pieces are the same color.
    pub fn is_ally(&self, other: &Piece) -> bool {
        self.color == other.color
    }

    /// Whether a pawn may still advance two squares. Always false for other kinds.
    pub fn can_double_jump(&self) -> bool {
        matches!(self.role, Role::Pawn { double_jump: true })
    }

    /// Toggles double-jump eligibility. No effect on non-pawns.
    pub fn set_double_jump(&mut self, eligible: bool) {
        if let Role::Pawn { double_jump } = &mut self.role {
            *double_jump = eligible;
        }
    }

    /// Remaining castle moves of a rook, `0` for every other kind.
    pub fn castle_moves_left(&self) -> u32 {
        match self.role {
            Role::Rook { castle_moves_left } => castle_moves_left,
            _ => 0,
        }
    }

    /// Spends one castle move. Returns false when none are left or this is not a rook.
    pub fn use_castle_move(&mut self) -> bool {
        match &mut self.role {
            Role::Rook { castle_moves_left } if *castle_moves_left > 0 => {
                *castle_moves_left -= 1;
                true
            }
            _ => false,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.kind())?;
        match self.position {
            Some(square) => write!(f, " at {}", square),
            None => write!(f, " (off board)"),
        }
    }
}
