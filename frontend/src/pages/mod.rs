pub mod admin;
pub mod demo;
pub mod inicio;
pub mod producto;
pub mod register;
pub mod sales_report;
pub mod single;
pub mod usuarios;
pub mod ventas;

pub use admin::AdminPage;
pub use demo::DemoPage;
pub use inicio::InicioPage;
pub use producto::ProductoPage;
pub use register::RegisterPage;
pub use sales_report::{OrdersPage, SalesReportPage};
pub use single::SinglePage;
pub use usuarios::UsuariosPage;
pub use ventas::VentasPage;
