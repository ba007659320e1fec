use crate::api::{ApiError, NewProduct};

pub fn parse_new_product(name: &str, price: &str, stock: &str) -> Result<NewProduct, ApiError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ApiError::validation("El nombre es obligatorio"));
    }
    let price = price
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|price| price.is_finite() && *price >= 0.0)
        .ok_or_else(|| ApiError::validation("El precio debe ser un número mayor o igual a 0"))?;
    let stock = stock
        .trim()
        .parse::<i64>()
        .ok()
        .filter(|stock| *stock >= 0)
        .ok_or_else(|| ApiError::validation("El stock debe ser un entero mayor o igual a 0"))?;
    Ok(NewProduct {
        name: name.to_string(),
        price,
        stock,
    })
}
