use crate::middleware::Middleware;

/// Leaves the handler untouched.
///
/// The starting middleware of every [`MuxBuilder`](crate::MuxBuilder), so a mux built without
/// calling `middleware` stores the registered handlers as they are.
#[derive(Default, Clone, Copy, Debug)]
pub struct Identity;

impl<H> Middleware<H> for Identity {
    type Output = H;

    #[inline(always)]
    fn wrap(&self, handler: H) -> Self::Output {
        handler
    }
}
