use super::*;

impl JourneyApp {
    /// Instantánea del estado duradero.
    pub fn to_record(&self) -> SavedRecord {
        SavedRecord {
            user_name: self.user_name.clone(),
            birth_date: self.birth_date.clone(),
            photo: self.photo.clone(),
            sex: self.sex,
            stage_progress: self.progress.clone(),
            current_stage_id: Some(self.sequencer.cursor().stage_id),
            posts: self.community.posts().to_vec(),
            bgm_tracks: self.bgm_tracks.clone(),
        }
    }

    /// Copia el estado al almacenamiento. Si falla, se sigue con lo que hay en memoria.
    pub fn persist(&mut self) {
        let record = self.to_record();
        store::save(self.store.as_mut(), &record);
    }

    /// Pasa los borradores de nacimiento y foto a la identidad, junto con `sex`.
    /// Sólo escribe en el almacenamiento si algo cambió.
    pub fn commit_identity(&mut self, sex: Sex) -> bool {
        let birth_date = self.drafts.birth_date.trim().to_string();
        let photo = Some(self.drafts.photo.trim())
            .filter(|p| !p.is_empty())
            .map(str::to_string);
        if birth_date == self.birth_date && photo == self.photo && sex == self.sex {
            return false;
        }
        self.birth_date = birth_date;
        self.photo = photo;
        self.sex = sex;
        self.persist();
        true
    }
}
