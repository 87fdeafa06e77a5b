pub mod data_model;
pub mod data_view;
pub mod normalizer;
pub mod point_scale;
pub mod scale;
pub mod types;

pub use data_model::{DataItem, DataModel, SelectionId};
pub use data_view::{
    CategoricalView, CategoryColumn, ColumnSource, DataView, PrimitiveValue, ValueColumn,
};
pub use normalizer::{
    ColumnIdentityBuilder, InputShapeError, ROW_COLOR_POINTER, SelectionIdBuilder, normalize,
    try_normalize,
};
pub use point_scale::PointScale;
pub use scale::LinearScale;
pub use types::{PixelPoint, Viewport};
