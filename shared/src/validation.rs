//! Input validation functions
//!
//! Field-level validators used by the API routes before a request
//! reaches the service layer. Length limits mirror the column
//! definitions in the database schema.

/// Validate a food or profile name
pub fn validate_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Name cannot be empty".to_string());
    }
    if name.chars().count() > 100 {
        return Err("Name must be at most 100 characters".to_string());
    }
    Ok(())
}

/// Validate a pet gender label
pub fn validate_gender(gender: &str) -> Result<(), String> {
    if gender.trim().is_empty() {
        return Err("Gender cannot be empty".to_string());
    }
    if gender.chars().count() > 20 {
        return Err("Gender must be at most 20 characters".to_string());
    }
    Ok(())
}

/// Validate a pet variety (breed)
pub fn validate_variety(variety: &str) -> Result<(), String> {
    if variety.trim().is_empty() {
        return Err("Variety cannot be empty".to_string());
    }
    if variety.chars().count() > 100 {
        return Err("Variety must be at most 100 characters".to_string());
    }
    Ok(())
}

/// Validate a free-form description
pub fn validate_description(description: &str) -> Result<(), String> {
    if description.chars().count() > 255 {
        return Err("Description must be at most 255 characters".to_string());
    }
    Ok(())
}

/// Validate daily meal count
pub fn validate_meals_per_day(meals: i32) -> Result<(), String> {
    if meals < 1 {
        return Err("Meals per day must be at least 1".to_string());
    }
    Ok(())
}
