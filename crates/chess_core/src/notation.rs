use cozy_chess::{Board, File, Move, Piece, Square};

use crate::error::{ChessError, ChessResult};

/// Render a move in standard coordinate notation (`e2e4`, `e7e8q`, `e1g1`).
///
/// Castling is stored internally as the king capturing its own rook; this
/// turns it back into the two-square king move humans expect. `board` is the
/// position the move is played from.
pub fn display_move(board: &Board, mv: Move) -> String {
    let mut to = mv.to;
    let is_castle = board.piece_on(mv.from) == Some(Piece::King)
        && board.piece_on(mv.to) == Some(Piece::Rook)
        && board.color_on(mv.from) == board.color_on(mv.to);
    if is_castle {
        let file = if mv.to.file() as usize > mv.from.file() as usize {
            File::G
        } else {
            File::C
        };
        to = Square::new(file, mv.from.rank());
    }

    let mut s = format!("{}{}", mv.from, to);
    if let Some(p) = mv.promotion {
        s.push(piece_char(p));
    }
    s
}

/// Lowercase letter of a piece kind.
pub fn piece_char(piece: Piece) -> char {
    match piece {
        Piece::Pawn => 'p',
        Piece::Knight => 'n',
        Piece::Bishop => 'b',
        Piece::Rook => 'r',
        Piece::Queen => 'q',
        Piece::King => 'k',
    }
}

pub fn parse_square(text: &str) -> ChessResult<Square> {
    text.trim()
        .to_ascii_lowercase()
        .parse::<Square>()
        .map_err(|_| ChessError::InvalidCoordinate(text.to_string()))
}

/// Parse `e2e4` or `e7e8q` into origin, destination and promotion piece.
pub fn parse_coordinates(text: &str) -> ChessResult<(Square, Square, Option<Piece>)> {
    let txt = text.trim();
    if !txt.is_ascii() || txt.len() < 4 || txt.len() > 5 {
        return Err(ChessError::InvalidCoordinate(text.to_string()));
    }
    let from = parse_square(&txt[0..2])?;
    let to = parse_square(&txt[2..4])?;
    let promotion = match txt[4..].chars().next() {
        None => None,
        Some(ch) => Some(match ch.to_ascii_lowercase() {
            'q' => Piece::Queen,
            'r' => Piece::Rook,
            'b' => Piece::Bishop,
            'n' => Piece::Knight,
            _ => return Err(ChessError::InvalidCoordinate(text.to_string())),
        }),
    };
    Ok((from, to, promotion))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_promotion_moves() {
        let (from, to, promo) = parse_coordinates("e2e4").unwrap();
        assert_eq!((from, to, promo), (Square::E2, Square::E4, None));

        let (_, _, promo) = parse_coordinates("e7e8Q").unwrap();
        assert_eq!(promo, Some(Piece::Queen));
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_coordinates("e2").is_err());
        assert!(parse_coordinates("z9e4").is_err());
        assert!(parse_coordinates("e7e8k").is_err());
        assert!(parse_coordinates("é2e4").is_err());
    }

    #[test]
    fn castling_is_shown_as_king_step() {
        let board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1", false).unwrap();
        let short = Move {
            from: Square::E1,
            to: Square::H1,
            promotion: None,
        };
        let long = Move {
            from: Square::E1,
            to: Square::A1,
            promotion: None,
        };
        assert_eq!(display_move(&board, short), "e1g1");
        assert_eq!(display_move(&board, long), "e1c1");
    }
}
