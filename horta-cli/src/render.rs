//! Text-card rendering for fetched collections: the terminal counterpart of
//! the original HTML cards, empty-state message included.

use horta_api::Resource;
use horta_api::models::{Crop, Event, Garden, Harvest, Plot, Product, User, UserGroup};

/// How a record presents itself as a card.
pub trait Card {
    fn title(&self) -> String;
    fn lines(&self) -> Vec<String>;
}

/// An empty collection renders its resource's empty-state message, never an
/// empty block of output.
pub fn collection<R: Resource + Card>(records: &[R]) -> String {
    if records.is_empty() {
        return R::EMPTY_MESSAGE.to_string();
    }
    records.iter().map(card).collect::<Vec<_>>().join("\n")
}

pub fn card<R: Card>(record: &R) -> String {
    let mut out = format!("• {}", record.title());
    for line in record.lines() {
        out.push_str("\n    ");
        out.push_str(&line);
    }
    out
}

fn or_dash(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| "—".to_string())
}

impl Card for Plot {
    fn title(&self) -> String {
        format!("Parcela {}", self.id)
    }

    fn lines(&self) -> Vec<String> {
        vec![
            format!("Localização: {}", self.location),
            format!("Tamanho: {} m²", self.size_m2),
            format!(
                "Status: {}",
                self.status.map(|s| s.to_string()).unwrap_or_else(|| "—".to_string())
            ),
        ]
    }
}

impl Card for Garden {
    fn title(&self) -> String {
        self.name.clone()
    }

    fn lines(&self) -> Vec<String> {
        vec![
            format!("Localização: {}", self.location),
            format!("Criada em: {}", self.created_on),
        ]
    }
}

impl Card for Product {
    fn title(&self) -> String {
        format!("{} (produto {})", self.name, self.id)
    }

    fn lines(&self) -> Vec<String> {
        vec![
            format!("Tipo: {}", self.kind),
            format!("Época de plantio: {}", or_dash(&self.planting_season)),
        ]
    }
}

impl Card for Event {
    fn title(&self) -> String {
        format!("{} ({})", self.name, self.date)
    }

    fn lines(&self) -> Vec<String> {
        vec![
            format!("Local: {}", or_dash(&self.venue)),
            format!("Descrição: {}", or_dash(&self.description)),
        ]
    }
}

impl Card for User {
    fn title(&self) -> String {
        self.name.clone()
    }

    fn lines(&self) -> Vec<String> {
        vec![
            format!("Email: {}", self.email),
            format!("Telefone: {}", or_dash(&self.phone)),
            format!("Grupo: {}", self.group_id),
        ]
    }
}

impl Card for UserGroup {
    fn title(&self) -> String {
        format!("{} (grupo {})", self.name, self.id)
    }

    fn lines(&self) -> Vec<String> {
        vec![format!("Descrição: {}", or_dash(&self.description))]
    }
}

impl Card for Crop {
    fn title(&self) -> String {
        format!("Produto {} na parcela {}", self.product_id, self.plot_id)
    }

    fn lines(&self) -> Vec<String> {
        vec![
            format!("Plantio: {}", self.planted_on),
            format!("Status: {}", self.status),
        ]
    }
}

impl Card for Harvest {
    fn title(&self) -> String {
        format!("Colheita {}", self.id)
    }

    fn lines(&self) -> Vec<String> {
        vec![
            format!("Parcela: {}", self.plot_id),
            format!("Produto: {}", self.product_id),
            format!("Data: {}", self.harvested_on),
            format!("Quantidade: {} kg", self.quantity_kg),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use horta_api::models::PlotStatus;

    #[test]
    fn empty_collection_renders_the_empty_state_message() {
        let rendered = collection::<Plot>(&[]);
        assert_eq!(rendered, "Nenhuma parcela cadastrada.");
    }

    #[test]
    fn records_render_as_cards() {
        let plots = vec![Plot {
            id: 3,
            size_m2: 12.5,
            location: "Setor B".to_string(),
            status: Some(PlotStatus::Free),
        }];
        let rendered = collection(&plots);
        assert!(rendered.contains("Parcela 3"));
        assert!(rendered.contains("Localização: Setor B"));
        assert!(rendered.contains("Status: Livre"));
    }
}
