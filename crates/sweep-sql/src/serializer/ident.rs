use super::{Formatter, Params, ToSql};

/// An identifier quoted in brackets; `]` is escaped by doubling.
pub(super) struct Ident<S>(pub(super) S);

impl<S: AsRef<str>> ToSql for Ident<S> {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        f.dst.push('[');
        for c in self.0.as_ref().chars() {
            f.dst.push(c);
            if c == ']' {
                f.dst.push(']');
            }
        }
        f.dst.push(']');
    }
}
