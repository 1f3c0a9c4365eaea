//! `reelcraft platforms`.

use reelcraft::Platform;

/// Print each known platform as `id<TAB>label`.
pub fn handle_platforms() {
    for platform in Platform::ALL {
        println!("{}\t{}", platform.id(), platform.label());
    }
}
