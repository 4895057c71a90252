use std::path::PathBuf;

/// Derives the ordered candidate files for a lookup context.
///
/// The first file in the list has the highest precedence. Any
/// `Fn(&C) -> Vec<PathBuf>` closure is a `FileList<C>`.
///
/// [`Config`](crate::Config) calls `files` while holding its cache lock, so
/// implementations must not call back into the same resolver.
pub trait FileList<C: ?Sized>: Send + Sync {
    fn files(&self, ctx: &C) -> Vec<PathBuf>;
}

impl<C: ?Sized, F> FileList<C> for F
where
    F: Fn(&C) -> Vec<PathBuf> + Send + Sync,
{
    fn files(&self, ctx: &C) -> Vec<PathBuf> {
        self(ctx)
    }
}
