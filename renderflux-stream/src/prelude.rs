// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Convenience re-export of every operator trait.

pub use crate::distinct_render_events::DistinctRenderEventsExt;
pub use crate::distinct_until_changed::DistinctUntilChangedExt;
pub use crate::distinct_until_changed_by::DistinctUntilChangedByExt;
pub use crate::switch_to_render_events::SwitchToRenderEventsExt;
pub use crate::tap::TapExt;
