//! Texture remapping between the MBG and MBU uv layouts.

#[doc(inline)]
pub use texremap_image as image;

#[doc(inline)]
pub use texremap_imgproc as imgproc;

#[doc(inline)]
pub use texremap_io as io;
