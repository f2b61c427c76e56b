pub mod combined;
pub mod coordinate;
pub mod district;
pub mod price;

pub use combined::{combine, CombinedRecord};
pub use coordinate::{Coordinate, CoordinateTable};
pub use district::{load_districts, RegionDistrictTable};
pub use price::{PriceRecord, Scalar};
