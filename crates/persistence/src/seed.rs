//! Startup data for the in-memory stores.

use domain::models::{Notification, NotificationStatus, Room, TimeSlot};

const SEED_DATE: &str = "2024-10-12";

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn slots(date: &str, windows: &[(&str, &str)]) -> Vec<TimeSlot> {
    windows
        .iter()
        .map(|(start, end)| TimeSlot::new(date, *start, *end))
        .collect()
}

#[allow(clippy::too_many_arguments)]
fn room(
    id: u32,
    name: &str,
    capacity: u32,
    description: &str,
    image_url: &str,
    facilities: &[&str],
    usage_history: &[&str],
    availability: Vec<TimeSlot>,
) -> Room {
    Room {
        id,
        name: name.to_string(),
        capacity,
        description: description.to_string(),
        image_url: image_url.to_string(),
        availability,
        facilities: strings(facilities),
        usage_history: strings(usage_history),
    }
}

/// The faculty rooms available when the process starts.
pub fn seed_rooms() -> Vec<Room> {
    vec![
        room(
            1,
            "GKM",
            100,
            "Gedung Kreativitas Bersama FILKOM UB",
            "https://images.unsplash.com/photo-1498050108023-c5249f4df085",
            &["Videotron", "Ac Central", "Kursi", "Lampu Sorot", "Audio", "Panggung"],
            &["Schotival 2024", "Hology 7.0"],
            vec![
                TimeSlot::new(SEED_DATE, "14:00", "16:00"),
                TimeSlot::new("2024-10-13", "09:00", "11:00"),
            ],
        ),
        room(
            2,
            "Algoritma G2",
            200,
            "Gedung Algoritma G2 FILKOM UB",
            "https://images.unsplash.com/photo-1524758631624-e2822e304c36",
            &["Videotron", "Ac Central", "Kursi", "Lampu Sorot", "Audio"],
            &["TechTalk 2024", "Futuristic Innovation Summit"],
            slots(
                SEED_DATE,
                &[
                    ("08:00", "11:00"),
                    ("11:30", "13:30"),
                    ("14:00", "16:00"),
                    ("16:30", "19:30"),
                    ("20:00", "23:00"),
                ],
            ),
        ),
        room(
            3,
            "Lab AI",
            50,
            "Laboratorium Artificial Intelligence FILKOM UB",
            "https://images.unsplash.com/photo-1571501679680-de32f1e7aad4",
            &["Komputer", "Proyektor", "AC", "Papan Tulis"],
            &["Workshop AI 2024", "Hackathon UB"],
            slots(
                SEED_DATE,
                &[
                    ("09:00", "11:00"),
                    ("11:30", "13:30"),
                    ("14:00", "16:00"),
                    ("16:30", "18:30"),
                ],
            ),
        ),
        room(
            4,
            "Ruang Seminar 1",
            150,
            "Ruang Seminar Utama FILKOM UB",
            "https://images.unsplash.com/photo-1498050108023-c5249f4df085",
            &["Mikrofon", "Proyektor", "Kursi", "Panggung"],
            &["Seminar Nasional IT", "Konferensi Data Science"],
            slots(
                SEED_DATE,
                &[
                    ("08:30", "10:30"),
                    ("11:00", "13:00"),
                    ("13:30", "15:30"),
                    ("16:00", "18:00"),
                ],
            ),
        ),
        room(
            5,
            "Ruang Seminar 2",
            100,
            "Ruang Seminar Kedua FILKOM UB",
            "https://images.unsplash.com/photo-1504384308090-c894fdcc538d",
            &["Proyektor", "Kursi", "Lampu Sorot", "Mikrofon"],
            &["Workshop Desain UI", "Seminar Open Source"],
            slots(
                SEED_DATE,
                &[
                    ("09:00", "11:00"),
                    ("11:30", "13:30"),
                    ("14:00", "16:00"),
                    ("16:30", "18:30"),
                ],
            ),
        ),
        room(
            6,
            "Ruang Rapat 1",
            20,
            "Ruang Rapat Pertama FILKOM UB",
            "https://images.unsplash.com/photo-1571501679680-de32f1e7aad4",
            &["Meja Besar", "AC", "Kursi", "Papan Tulis"],
            &["Rapat Prodi", "Rapat Dosen"],
            slots(
                SEED_DATE,
                &[
                    ("08:30", "10:30"),
                    ("11:00", "13:00"),
                    ("13:30", "15:30"),
                    ("16:00", "18:00"),
                ],
            ),
        ),
        room(
            7,
            "Ruang Diskusi 1",
            30,
            "Ruang Diskusi Utama FILKOM UB",
            "https://images.unsplash.com/photo-1524758631624-e2822e304c36",
            &["Meja Bundar", "Papan Tulis", "AC", "Kursi"],
            &["Diskusi Kelompok", "Pelatihan Teamwork"],
            slots(
                SEED_DATE,
                &[
                    ("09:00", "11:00"),
                    ("11:30", "13:30"),
                    ("14:00", "16:00"),
                    ("16:30", "18:30"),
                ],
            ),
        ),
        room(
            8,
            "Ruang Diskusi 2",
            25,
            "Ruang Diskusi Kedua FILKOM UB",
            "https://images.unsplash.com/photo-1524758631624-e2822e304c36",
            &["Meja Bundar", "Proyektor", "Kursi", "Papan Tulis"],
            &["Diskusi Topik Riset", "Sharing Session Alumni"],
            slots(
                SEED_DATE,
                &[
                    ("09:00", "11:00"),
                    ("11:30", "13:30"),
                    ("14:00", "16:00"),
                    ("16:30", "18:30"),
                ],
            ),
        ),
        room(
            9,
            "Lab Multimedia",
            40,
            "Laboratorium Multimedia FILKOM UB",
            "https://images.unsplash.com/photo-1524758631624-e2822e304c36",
            &["Komputer", "Proyektor", "AC", "Speaker"],
            &["Workshop Video Editing", "Pelatihan Photoshop"],
            slots(
                SEED_DATE,
                &[
                    ("08:00", "10:00"),
                    ("10:30", "12:30"),
                    ("13:00", "15:00"),
                    ("15:30", "17:30"),
                ],
            ),
        ),
        room(
            10,
            "Auditorium",
            300,
            "Auditorium Utama FILKOM UB",
            "https://images.unsplash.com/photo-1524758631624-e2822e304c36",
            &["Videotron", "AC Central", "Panggung", "Lampu Sorot", "Kursi"],
            &["Konser Kampus", "Wisuda UB"],
            slots(
                SEED_DATE,
                &[
                    ("08:00", "10:00"),
                    ("10:30", "12:30"),
                    ("13:00", "15:00"),
                    ("15:30", "17:30"),
                ],
            ),
        ),
    ]
}

/// Borrow requests present when the process starts.
pub fn seed_notifications() -> Vec<Notification> {
    let entry = |id, room_id, date: &str, start: &str, end: &str, status, file: &str, desc: &str| {
        Notification {
            id,
            room_id,
            borrow_date: date.to_string(),
            start_time: start.to_string(),
            end_time: end.to_string(),
            status,
            file: file.to_string(),
            description: desc.to_string(),
            username: None,
        }
    };

    vec![
        entry(
            1,
            1,
            SEED_DATE,
            "14:00",
            "16:00",
            NotificationStatus::Approved,
            "contract1.pdf",
            "Peminjaman untuk seminar teknologi",
        ),
        entry(
            2,
            2,
            "2024-10-13",
            "09:00",
            "11:00",
            NotificationStatus::Pending,
            "",
            "Penggunaan ruangan untuk pertemuan organisasi",
        ),
        entry(
            3,
            1,
            "2024-10-14",
            "10:00",
            "12:00",
            NotificationStatus::Rejected,
            "presentation_slides.pdf",
            "Kegiatan workshop desain grafis",
        ),
    ]
}
