pub mod assets;
pub mod renderer;

pub use assets::{ASSET_COUNT, TileAsset, tile_asset};
pub use renderer::Renderer;
