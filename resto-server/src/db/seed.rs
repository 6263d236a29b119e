//! 种子数据
//!
//! Demo sample data loaded at startup so the API is usable out of the
//! box.

use shared::{
    Category, Customer, DiningTable, MenuItem, Order, OrderItem, PaymentIcon, PaymentMethod,
    Reservation, Staff,
};

use crate::cart::{Cart, DEFAULT_TAX_RATE_PERCENT};

pub fn menu_items() -> Vec<MenuItem> {
    let raw: &[(i64, &str, &str, f64, &str)] = &[
        (1, "Nasi Goreng Spesial", "Makanan Utama", 45000.0, "Tersedia"),
        (2, "Mie Goreng Seafood", "Makanan Utama", 50000.0, "Tersedia"),
        (3, "Sate Ayam", "Makanan Utama", 35000.0, "Tersedia"),
        (4, "Es Teh Manis", "Minuman", 10000.0, "Tersedia"),
        (5, "Jus Alpukat", "Minuman", 15000.0, "Habis"),
        (6, "Ayam Bakar", "Makanan Utama", 55000.0, "Tersedia"),
        (7, "Soto Ayam", "Makanan Utama", 30000.0, "Tersedia"),
        (8, "Es Jeruk", "Minuman", 12000.0, "Tersedia"),
    ];
    raw.iter()
        .map(|&(id, name, category, price, status)| MenuItem {
            id,
            name: name.to_string(),
            category: category.to_string(),
            price,
            status: status.to_string(),
            image: "/placeholder.svg".to_string(),
        })
        .collect()
}

pub fn categories() -> Vec<Category> {
    let raw: &[(i64, &str, &str, &str)] = &[
        (
            1,
            "Makanan Utama",
            "Menu makanan utama untuk makan siang dan makan malam",
            "bg-red-100 text-red-800",
        ),
        (
            2,
            "Makanan Pembuka",
            "Hidangan pembuka untuk memulai santapan",
            "bg-amber-100 text-amber-800",
        ),
        (
            3,
            "Makanan Penutup",
            "Hidangan penutup dan dessert",
            "bg-purple-100 text-purple-800",
        ),
        (
            4,
            "Minuman",
            "Berbagai minuman segar dan hangat",
            "bg-blue-100 text-blue-800",
        ),
        (
            5,
            "Camilan",
            "Makanan ringan dan camilan",
            "bg-green-100 text-green-800",
        ),
    ];
    raw.iter()
        .map(|&(id, name, description, color)| Category {
            id,
            name: name.to_string(),
            description: description.to_string(),
            color: color.to_string(),
        })
        .collect()
}

pub fn dining_tables() -> Vec<DiningTable> {
    let raw: &[(i64, &str, i32, &str, &str)] = &[
        (1, "Meja 1", 4, "Tersedia", "Indoor"),
        (2, "Meja 2", 2, "Terisi", "Indoor"),
        (3, "Meja 3", 6, "Tersedia", "Outdoor"),
        (4, "Meja 4", 4, "Tersedia", "Indoor"),
        (5, "Meja 5", 8, "Terisi", "Outdoor"),
        (6, "Meja 6", 2, "Tersedia", "Indoor"),
        (7, "Meja 7", 4, "Terisi", "Indoor"),
        (8, "Meja 8", 6, "Tersedia", "Outdoor"),
        (9, "VIP 1", 10, "Tersedia", "VIP"),
        (10, "Rooftop 1", 6, "Terisi", "Rooftop"),
    ];
    raw.iter()
        .map(|&(id, number, capacity, status, location)| DiningTable {
            id,
            number: number.to_string(),
            capacity,
            status: status.to_string(),
            location: location.to_string(),
        })
        .collect()
}

pub fn staff() -> Vec<Staff> {
    let raw: &[(i64, &str, &str, &str, &str, &str, &str, &str)] = &[
        (
            1, "Ahmad Rizki", "ahmad@restoran.com", "081234567890", "Admin", "2023-01-15",
            "Aktif", "Jl. Merdeka No. 123, Jakarta",
        ),
        (
            2, "Budi Santoso", "budi@restoran.com", "081234567891", "Manajer", "2023-02-20",
            "Aktif", "Jl. Sudirman No. 45, Jakarta",
        ),
        (
            3, "Citra Dewi", "citra@restoran.com", "081234567892", "Kasir", "2023-03-10",
            "Aktif", "Jl. Gatot Subroto No. 67, Jakarta",
        ),
        (
            4, "Deni Hermawan", "deni@restoran.com", "081234567893", "Koki", "2023-04-05",
            "Aktif", "Jl. Pahlawan No. 89, Jakarta",
        ),
        (
            5, "Eka Putri", "eka@restoran.com", "081234567894", "Pelayan", "2023-05-12",
            "Aktif", "Jl. Diponegoro No. 34, Jakarta",
        ),
        (
            6, "Faisal Rahman", "faisal@restoran.com", "081234567895", "Developer", "2023-06-18",
            "Aktif", "Jl. Asia Afrika No. 56, Jakarta",
        ),
        (
            7, "Gita Nirmala", "gita@restoran.com", "081234567896", "Pelayan", "2023-07-22",
            "Tidak Aktif", "Jl. Cendrawasih No. 78, Jakarta",
        ),
        (
            8, "Hadi Santoso", "hadi@restoran.com", "081234567897", "Koki", "2023-08-30",
            "Aktif", "Jl. Kebon Sirih No. 90, Jakarta",
        ),
        (
            9, "Indah Permata", "indah@restoran.com", "081234567898", "Developer", "2023-09-14",
            "Aktif", "Jl. Thamrin No. 12, Jakarta",
        ),
        (
            10, "Joko Widodo", "joko@restoran.com", "081234567899", "Admin", "2023-10-25",
            "Tidak Aktif", "Jl. Veteran No. 23, Jakarta",
        ),
    ];
    raw.iter()
        .map(
            |&(id, name, email, phone, role, join_date, status, address)| Staff {
                id,
                name: name.to_string(),
                email: email.to_string(),
                phone: phone.to_string(),
                role: role.to_string(),
                join_date: join_date.to_string(),
                status: status.to_string(),
                address: address.to_string(),
                photo: "/placeholder.svg".to_string(),
            },
        )
        .collect()
}

pub fn customers() -> Vec<Customer> {
    let raw: &[(i64, &str, &str, &str, &str, i32, &str, i32, &str)] = &[
        (
            1, "Budi Santoso", "budi@example.com", "081234567890", "Regular", 12,
            "15 Mei 2025", 120, "Suka meja di dekat jendela",
        ),
        (
            2, "Siti Rahayu", "siti@example.com", "081234567891", "VIP", 25,
            "10 Mei 2025", 350, "Alergi kacang",
        ),
        (
            3, "Ahmad Hidayat", "ahmad@example.com", "081234567892", "Regular", 5,
            "5 Mei 2025", 50, "",
        ),
        (
            4, "Dewi Lestari", "dewi@example.com", "081234567893", "VIP", 18,
            "12 Mei 2025", 220, "Ulang tahun: 23 Juni",
        ),
        (
            5, "Rudi Hartono", "rudi@example.com", "081234567894", "Regular", 3,
            "2 Mei 2025", 30, "",
        ),
        (
            6, "Rina Wijaya", "rina@example.com", "081234567895", "VIP", 30,
            "16 Mei 2025", 450, "Suka wine merah",
        ),
    ];
    raw.iter()
        .map(
            |&(id, name, email, phone, customer_type, visits, last_visit, points, notes)| {
                Customer {
                    id,
                    name: name.to_string(),
                    email: email.to_string(),
                    phone: phone.to_string(),
                    customer_type: customer_type.to_string(),
                    visits,
                    last_visit: last_visit.to_string(),
                    points,
                    notes: notes.to_string(),
                }
            },
        )
        .collect()
}

pub fn payment_methods() -> Vec<PaymentMethod> {
    let raw: &[(i64, &str, &str, bool, PaymentIcon, &str)] = &[
        (
            1, "Cash", "Pembayaran tunai langsung", true, PaymentIcon::Wallet,
            "bg-green-100 text-green-800",
        ),
        (
            2, "Kartu Kredit", "Visa, Mastercard, American Express", true, PaymentIcon::CreditCard,
            "bg-blue-100 text-blue-800",
        ),
        (
            3, "Kartu Debit", "Visa Debit, Mastercard Debit", true, PaymentIcon::CreditCard,
            "bg-purple-100 text-purple-800",
        ),
        (
            4, "QRIS", "QR Code untuk pembayaran digital", true, PaymentIcon::QrCode,
            "bg-amber-100 text-amber-800",
        ),
        (
            5, "Mobile Banking", "Transfer melalui aplikasi mobile banking", false,
            PaymentIcon::Smartphone, "bg-pink-100 text-pink-800",
        ),
    ];
    raw.iter()
        .map(|&(id, name, description, active, icon, color)| PaymentMethod {
            id,
            name: name.to_string(),
            description: description.to_string(),
            active,
            icon,
            color: color.to_string(),
        })
        .collect()
}

pub fn reservations() -> Vec<Reservation> {
    let raw: &[(i64, &str, &str, i32, &str, &str, &str, &str, i32)] = &[
        (1, "Budi Santoso", "Meja 3", 4, "17 Mei 2025", "19:00", "Dikonfirmasi", "081234567890", 2),
        (2, "Siti Rahayu", "Meja 5", 6, "17 Mei 2025", "20:00", "Menunggu", "081234567891", 3),
        (3, "Ahmad Hidayat", "Meja 1", 2, "18 Mei 2025", "18:30", "Dikonfirmasi", "081234567892", 2),
        (4, "Dewi Lestari", "Meja 7", 4, "18 Mei 2025", "19:30", "Dikonfirmasi", "081234567893", 2),
        (5, "Rudi Hartono", "Meja 2", 2, "19 Mei 2025", "20:00", "Menunggu", "081234567894", 1),
        (6, "Rina Wijaya", "VIP 1", 8, "20 Mei 2025", "19:00", "Dikonfirmasi", "081234567895", 3),
        (7, "Joko Susilo", "Meja 4", 3, "17 Mei 2025", "18:00", "Dibatalkan", "081234567896", 2),
    ];
    raw.iter()
        .map(
            |&(id, name, table, guests, date, time, status, contact, duration)| Reservation {
                id,
                name: name.to_string(),
                table: table.to_string(),
                guests,
                date: date.to_string(),
                time: time.to_string(),
                status: status.to_string(),
                contact: contact.to_string(),
                duration,
            },
        )
        .collect()
}

pub fn orders() -> Vec<Order> {
    let raw: &[(i64, &str, &str, &[(&str, i32, f64)], &str, &str, &str)] = &[
        (
            1001, "Meja 2", "Budi Santoso",
            &[("Nasi Goreng Spesial", 2, 45000.0), ("Es Teh Manis", 2, 10000.0)],
            "Selesai", "17 Mei 2025", "19:45",
        ),
        (
            1002, "Meja 5", "Siti Rahayu",
            &[
                ("Mie Goreng Seafood", 1, 50000.0),
                ("Ayam Bakar", 1, 55000.0),
                ("Jus Alpukat", 2, 15000.0),
            ],
            "Diproses", "17 Mei 2025", "20:15",
        ),
        (
            1003, "Meja 1", "Ahmad Hidayat",
            &[("Sate Ayam", 2, 35000.0), ("Es Jeruk", 2, 12000.0)],
            "Selesai", "17 Mei 2025", "18:30",
        ),
        (
            1004, "Meja 7", "Dewi Lestari",
            &[
                ("Nasi Goreng Spesial", 1, 45000.0),
                ("Soto Ayam", 1, 30000.0),
                ("Es Teh Manis", 2, 10000.0),
            ],
            "Diproses", "17 Mei 2025", "20:30",
        ),
        (
            1005, "Meja 3", "Rudi Hartono",
            &[("Ayam Bakar", 2, 55000.0), ("Es Jeruk", 2, 12000.0)],
            "Menunggu", "17 Mei 2025", "20:45",
        ),
    ];
    raw.iter()
        .map(|&(id, table, customer, items, status, date, time)| {
            let items: Vec<OrderItem> = items
                .iter()
                .map(|&(name, quantity, price)| OrderItem {
                    name: name.to_string(),
                    quantity,
                    price,
                })
                .collect();
            // Totals derived through the same ledger math the cart uses
            let mut cart = Cart::new();
            for (i, item) in items.iter().enumerate() {
                cart.add_or_increment(i as i64 + 1, &item.name, item.price);
                cart.set_quantity(i as i64 + 1, item.quantity);
            }
            let totals = cart.totals(DEFAULT_TAX_RATE_PERCENT);
            Order {
                id,
                table: table.to_string(),
                customer: customer.to_string(),
                items,
                subtotal: totals.subtotal,
                tax: totals.tax,
                total: totals.total,
                status: status.to_string(),
                date: date.to_string(),
                time: time.to_string(),
                payment: None,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_collections_have_expected_sizes() {
        assert_eq!(menu_items().len(), 8);
        assert_eq!(categories().len(), 5);
        assert_eq!(dining_tables().len(), 10);
        assert_eq!(staff().len(), 10);
        assert_eq!(customers().len(), 6);
        assert_eq!(payment_methods().len(), 5);
        assert_eq!(reservations().len(), 7);
        assert_eq!(orders().len(), 5);
    }

    #[test]
    fn seeded_order_totals_are_consistent() {
        for order in orders() {
            let expected: f64 = order
                .items
                .iter()
                .map(|i| i.price * i.quantity as f64)
                .sum();
            assert_eq!(order.subtotal, expected);
            assert_eq!(order.total, order.subtotal + order.tax);
        }
    }
}
