use bytes::Bytes;

/// One re-encoded raster copy.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedImage {
    pub data: Bytes,
    pub width: u32,
    pub height: u32,
}

/// The three raster copies produced for every uploaded product image.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizedProductImage {
    pub large: EncodedImage,
    pub medium: EncodedImage,
    pub small: EncodedImage,
}
