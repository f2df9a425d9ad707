// ============================================================================
// MOCK DATA - Catálogo de demo (funciona sin backend)
// ============================================================================

use crate::models::{Item, ItemId, ItemStatus, Task, TaskStatus};

fn item(id: ItemId, title: &str, category: &str, price: u64, image: &str, seller: &str, coins: u32) -> Item {
    Item {
        id,
        title: title.to_string(),
        category: category.to_string(),
        price,
        status: ItemStatus::Active,
        seller_name: seller.to_string(),
        views: 0,
        green_coins_reward: coins,
        image: Some(image.to_string()),
        image_url: None,
        buyer_name: None,
        sold_at: None,
        waste_used_kg: None,
        medium: None,
    }
}

fn artwork(id: ItemId, title: &str, price: u64, image: &str, seller: &str, waste_kg: f32, medium: &str) -> Item {
    Item {
        waste_used_kg: Some(waste_kg),
        medium: Some(medium.to_string()),
        ..item(id, title, "artwork", price, image, seller, 0)
    }
}

fn sold_artwork(id: ItemId, title: &str, buyer: &str, price: u64, date: &str, medium: &str) -> Item {
    Item {
        status: ItemStatus::Sold,
        buyer_name: Some(buyer.to_string()),
        sold_at: Some(date.to_string()),
        medium: Some(medium.to_string()),
        ..item(id, title, "artwork", price, "🎨", "You", 0)
    }
}

fn listing(id: ItemId, title: &str, category: &str, price: u64, status: ItemStatus, image: &str, views: u32) -> Item {
    Item {
        status,
        views,
        ..item(id, title, category, price, image, "You", 0)
    }
}

/// Chatarra disponible (ids 1..)
pub fn scrap_items() -> Vec<Item> {
    vec![
        item(1, "Copper Wire Bundle", "metal", 80, "🔩", "Ravi K.", 12),
        item(2, "Old Circuit Boards", "e-waste", 120, "💾", "Priya M.", 18),
        item(3, "Teak Wood Offcuts", "wood", 200, "🪵", "Arjun S.", 30),
        item(4, "PET Bottles (50 pcs)", "plastic", 45, "🫙", "Meena R.", 8),
        item(5, "Iron Rods Assorted", "metal", 150, "🔧", "Suresh T.", 22),
        item(6, "Old Newspapers Bulk", "paper", 30, "📰", "Lata B.", 5),
        item(7, "Broken Clock Parts", "metal", 60, "⚙️", "Dev P.", 9),
        item(8, "Fabric Scraps (Cotton)", "textile", 55, "🧵", "Sana K.", 7),
        item(9, "Glass Bottles (20)", "glass", 40, "🍶", "Nisha M.", 6),
    ]
}

/// Galería de obras (ids 101..)
pub fn artworks() -> Vec<Item> {
    vec![
        artwork(101, "Scrap Metal Kinetic Sculpture", 3500, "🔩", "Ravi K.", 12.5, "Metal + Wire"),
        artwork(102, "Circuit Board Mandala", 2800, "💾", "Priya M.", 3.2, "E-Waste"),
        artwork(103, "Upcycled Wood Frame", 1200, "🪵", "Arjun S.", 8.0, "Reclaimed Wood"),
        artwork(104, "Copper Wind Chimes", 950, "🔩", "Meena R.", 2.1, "Copper Wire"),
        artwork(105, "PET Bottle Garden Lamp", 650, "🫙", "Sana K.", 1.8, "Plastic"),
        artwork(106, "Newspaper Pulp Sculpture", 480, "📰", "Lata B.", 5.5, "Paper"),
    ]
}

/// Obras ya vendidas (ids 201..)
pub fn sold_artworks() -> Vec<Item> {
    vec![
        sold_artwork(201, "Scrap Metal Kinetic", "ArtHouse Delhi", 3500, "Feb 22, 2025", "Metal + Wire"),
        sold_artwork(202, "Circuit Board Mandala", "TechMuseum Bengaluru", 2800, "Feb 18, 2025", "E-Waste"),
        sold_artwork(203, "Upcycled Wood Frame", "GreenHome Decor", 1200, "Feb 10, 2025", "Reclaimed Wood"),
        sold_artwork(204, "Copper Wind Chimes", "EcoLiving Co.", 950, "Jan 30, 2025", "Copper Wire"),
    ]
}

/// Listados del usuario demo (ids 301..)
pub fn user_listings() -> Vec<Item> {
    vec![
        listing(301, "Old Bicycle Frame", "metal", 300, ItemStatus::Active, "🚲", 14),
        listing(302, "Broken Laptop", "e-waste", 500, ItemStatus::Sold, "💻", 38),
        listing(303, "Glass Jars (10)", "glass", 0, ItemStatus::Donated, "🫙", 7),
        listing(304, "Steel Pipe Bundle", "metal", 180, ItemStatus::Active, "🔩", 5),
    ]
}

pub fn helper_tasks() -> Vec<Task> {
    let task = |id, requester: &str, pickup: &str, dropoff: &str, items: &str, weight: &str, status, reward, urgent, at: &str| Task {
        id,
        status,
        item_description: items.to_string(),
        requester_name: requester.to_string(),
        green_coins_reward: reward,
        is_urgent: urgent,
        pickup_address: pickup.to_string(),
        dropoff_address: dropoff.to_string(),
        weight: Some(weight.to_string()),
        assigned_helper: match status {
            TaskStatus::Pending => None,
            _ => Some("Helper".to_string()),
        },
        scheduled_at: Some(at.to_string()),
    };

    vec![
        task(1, "GreenArt Studio", "12, MG Road, Shivajinagar, Pune", "GreenArt Studio, FC Road, Pune",
            "Metal scraps, copper wire bundles", "15 kg", TaskStatus::Pending, 45, true, "Today, 10:00 AM"),
        task(2, "EcoHub Warehouse", "7, Baner Road, Baner, Pune", "EcoHub Warehouse, Aundh, Pune",
            "PET bottles, cardboard boxes", "8 kg", TaskStatus::Collected, 28, false, "Today, 1:30 PM"),
        task(3, "Creative Collective", "23, Karve Nagar, Kothrud, Pune", "Creative Collective, Kasba Peth, Pune",
            "E-waste components, circuit boards", "5 kg", TaskStatus::Delivered, 35, false, "Today, 9:00 AM"),
        task(4, "Upcycle Labs", "4, Koregaon Park, Pune", "Upcycle Labs, Viman Nagar, Pune",
            "Fabric scraps, glass bottles", "10 kg", TaskStatus::Assigned, 32, false, "Tomorrow, 11:00 AM"),
    ]
}
