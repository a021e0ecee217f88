//! Default dataset shown on first launch or when the local store is
//! unreadable. Ids are fixed so a reseeded workspace is stable.

use crate::model::{Folder, Note};

fn note(id: &str, title: &str, content: &str) -> Note {
    Note {
        id: id.to_string(),
        title: title.to_string(),
        content: content.to_string(),
        is_peeked: false,
    }
}

pub fn folders() -> Vec<Folder> {
    vec![
        Folder {
            id: "folder-1".to_string(),
            name: "~/skripsi/sejarah_lisan".to_string(),
            is_expanded: false,
            notes: vec![note(
                "note-1",
                "wawancara_pak_hartono.md",
                "Narasumber utama untuk bab 3. Punya arsip foto 98. Beliau bilang kalau arsip itu \
                 harus dijaga baik-baik karena bukti sejarah yang otentik tidak bisa dipalsukan \
                 begitu saja.",
            )],
        },
        Folder {
            id: "folder-2".to_string(),
            name: "~/kuliah/filsafat".to_string(),
            is_expanded: true,
            notes: vec![note(
                "note-f1",
                "stoikisme_intro.txt",
                "Fokus pada apa yang bisa dikendalikan. Abaikan opini orang lain. Hidup itu bukan \
                 tentang apa yang terjadi padamu, tapi bagaimana kamu bereaksi terhadapnya.",
            )],
        },
    ]
}

pub fn root_notes() -> Vec<Note> {
    vec![
        note(
            "root-1",
            "ide_lukisan.txt",
            "Konsep: Cyberpunk Jakarta. Canvas 40x60. Acrylic. Warna dominan neon pink dan cyan, \
             tapi ada sentuhan kearifan lokal seperti gerobak nasgor yang terbang.",
        ),
        note(
            "root-2",
            "grocery_unj.list",
            "1. Rokok Ziga\n2. Kopi Hitam Kantin Blok M\n3. Kertas A3\n4. Cat Minyak\n5. Kuas nomor 12",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_ids_are_unique() {
        let folders = folders();
        let mut ids: Vec<&str> = folders.iter().map(|f| f.id.as_str()).collect();
        ids.extend(folders.iter().flat_map(|f| f.notes.iter()).map(|n| n.id.as_str()));
        let roots = root_notes();
        ids.extend(roots.iter().map(|n| n.id.as_str()));
        let unique: std::collections::HashSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn seed_notes_start_unpeeked() {
        assert!(root_notes().iter().all(|n| !n.is_peeked));
        assert!(folders()
            .iter()
            .flat_map(|f| f.notes.iter())
            .all(|n| !n.is_peeked));
    }
}
