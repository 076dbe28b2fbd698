mod artists;
mod genres;
mod shows;
mod venues;

pub use artists::ArtistRepository;
pub use shows::ShowRepository;
pub use venues::VenueRepository;

use sea_orm::sea_query::{Expr, IntoColumnRef, SimpleExpr};

/// Case-insensitive substring match with LIKE wildcards in `term` escaped.
/// Column and pattern are both folded by the database's `LOWER`.
pub(crate) fn name_contains<T: IntoColumnRef>(column: T, term: &str) -> SimpleExpr {
    let pattern = format!("%{}%", escape_like(term));
    Expr::cust_with_exprs(
        "LOWER($1) LIKE LOWER($2) ESCAPE '!'",
        [Expr::col(column).into(), Expr::val(pattern).into()],
    )
}

fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '!' | '%' | '_') {
            escaped.push('!');
        }
        escaped.push(c);
    }
    escaped
}
