//! Display label tables
//!
//! Field keys arrive in both the backend's Spanish naming and English
//! naming. Lookups are exact for field keys and case-insensitive for
//! status and priority values.

use crate::reports::synonyms::normalize;

/// Field key to column label
const FIELD_LABELS: &[(&str, &str)] = &[
    ("id", "ID"),
    ("nombre", "Name"),
    ("name", "Name"),
    ("apellido", "Last Name"),
    ("last_name", "Last Name"),
    ("documento", "Document"),
    ("document", "Document"),
    ("email", "Email"),
    ("correo", "Email"),
    ("telefono", "Phone"),
    ("phone", "Phone"),
    ("direccion", "Address"),
    ("address", "Address"),
    ("ciudad", "City"),
    ("city", "City"),
    ("cliente", "Client"),
    ("client", "Client"),
    ("cliente_id", "Client ID"),
    ("client_id", "Client ID"),
    ("conductor", "Driver"),
    ("driver", "Driver"),
    ("conductor_id", "Driver ID"),
    ("driver_id", "Driver ID"),
    ("licencia", "License"),
    ("license", "License"),
    ("vehiculo", "Vehicle"),
    ("vehicle", "Vehicle"),
    ("vehiculo_id", "Vehicle ID"),
    ("vehicle_id", "Vehicle ID"),
    ("placa", "License Plate"),
    ("plate", "License Plate"),
    ("marca", "Brand"),
    ("brand", "Brand"),
    ("modelo", "Model"),
    ("model", "Model"),
    ("tipo", "Type"),
    ("tipo_vehiculo", "Vehicle Type"),
    ("vehicle_type", "Vehicle Type"),
    ("capacidad", "Capacity"),
    ("capacity", "Capacity"),
    ("numero_pedido", "Order Number"),
    ("order_number", "Order Number"),
    ("descripcion", "Description"),
    ("description", "Description"),
    ("origen", "Origin"),
    ("origin", "Origin"),
    ("destino", "Destination"),
    ("destination", "Destination"),
    ("direccion_origen", "Pickup Address"),
    ("direccion_destino", "Delivery Address"),
    ("peso", "Weight"),
    ("weight", "Weight"),
    ("valor", "Value"),
    ("value", "Value"),
    ("estado", "Status"),
    ("status", "Status"),
    ("prioridad", "Priority"),
    ("priority", "Priority"),
    ("fecha_pedido", "Order Date"),
    ("order_date", "Order Date"),
    ("fecha_entrega", "Delivery Date"),
    ("delivery_date", "Delivery Date"),
    ("fecha_creacion", "Created"),
    ("created_at", "Created"),
    ("fecha_actualizacion", "Updated"),
    ("updated_at", "Updated"),
];

/// Backend status spelling (normalized) to display label
const STATUS_LABELS: &[(&str, &str)] = &[
    ("pendiente", "Pending"),
    ("pending", "Pending"),
    ("creado", "Created"),
    ("created", "Created"),
    ("asignado", "Assigned"),
    ("assigned", "Assigned"),
    ("en_progreso", "In Progress"),
    ("en_curso", "In Progress"),
    ("in_progress", "In Progress"),
    ("en_transito", "In Transit"),
    ("en_tránsito", "In Transit"),
    ("in_transit", "In Transit"),
    ("entregado", "Delivered"),
    ("delivered", "Delivered"),
    ("completado", "Completed"),
    ("finalizado", "Completed"),
    ("completed", "Completed"),
    ("cancelado", "Cancelled"),
    ("anulado", "Cancelled"),
    ("cancelled", "Cancelled"),
    ("canceled", "Cancelled"),
    ("activo", "Active"),
    ("active", "Active"),
    ("inactivo", "Inactive"),
    ("inactive", "Inactive"),
    ("disponible", "Available"),
    ("available", "Available"),
    ("no_disponible", "Unavailable"),
    ("unavailable", "Unavailable"),
    ("mantenimiento", "In Maintenance"),
    ("maintenance", "In Maintenance"),
];

/// Priority value (lowercase) to display label
const PRIORITY_LABELS: &[(&str, &str)] = &[
    ("baja", "Low"),
    ("low", "Low"),
    ("media", "Medium"),
    ("medium", "Medium"),
    ("alta", "High"),
    ("high", "High"),
    ("urgente", "Urgent"),
    ("urgent", "Urgent"),
];

fn lookup(table: &[(&str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Column label for a field key
pub fn field_label(key: &str) -> String {
    match lookup(FIELD_LABELS, key) {
        Some(label) => label.to_string(),
        None => humanize(key),
    }
}

/// Display label for a status value, if mapped
///
/// Case and separator style are ignored, as in the status filters.
pub fn status_label(value: &str) -> Option<&'static str> {
    lookup(STATUS_LABELS, &normalize(value))
}

/// Display label for a priority value, if mapped
pub fn priority_label(value: &str) -> Option<&'static str> {
    lookup(PRIORITY_LABELS, &value.trim().to_lowercase())
}

/// Turn `snake_case`, `kebab-case` or dotted keys into title-cased words
pub fn humanize(key: &str) -> String {
    key.split(|c: char| c == '_' || c == '-' || c == '.' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
