//! Render driver.
//!
//! [`Root`] keeps the tree last rendered into a [`HostSurface`] and decides
//! whether the next call mounts, patches or removes. Diffing and host
//! mutation belong to the surface implementation.
//!
//! ```ignore
//! use spark_vnode::{h, Root};
//!
//! let mut root = Root::new(my_surface);
//! root.render(Some(h("div", None, "hello")?))?;   // mount
//! root.render(Some(h("div", None, "world")?))?;   // patch
//! root.render(None)?;                              // remove
//! ```

mod root;
mod surface;

pub use root::Root;
pub use surface::HostSurface;
