//! Map layer: Leaflet interop, icon image loading and the render port.

mod images;
mod leaflet;
mod port;

pub use images::HttpImageSource;
pub use leaflet::LeafletMap;
pub use port::MapPort;
