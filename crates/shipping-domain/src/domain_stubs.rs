use crate::domain_repository::{InMemoryShipmentRepository, ShipmentRepository};
use crate::{Address, Carrier, CarrierService, Company, ContactMechanism, Party, Shipment, Warehouse, WeightUnit};
use rust_decimal::Decimal;

pub struct DomainStubs;

impl DomainStubs {
    /// Empresa de ejemplo con una dirección fiscal en Madrid.
    pub fn sample_company() -> Company {
        let mut party = Party::new("Distribuciones Ñandú S.L.");
        party.vat_code = Some("ESB12345678".into());
        party.addresses.push(Address::default().with_street("Calle Alcalá 1")
                                               .with_city("Madrid")
                                               .with_zip("28014")
                                               .with_subdivision("Madrid")
                                               .with_country("ES"));
        party.contact_mechanisms.push(ContactMechanism::new("phone", "910000000"));
        party.contact_mechanisms.push(ContactMechanism::new("email", "envios@nandu.test"));
        Company { party }
    }

    /// Albarán listo para enviar: cliente con dirección española completa.
    pub fn sample_shipment(code: &str) -> Shipment {
        let mut customer = Party::new("José Pérez Muñoz");
        customer.contact_mechanisms.push(ContactMechanism::new("mobile", "600000000"));
        let delivery = Address::default().with_street("Avenida de Andalucía 12")
                                         .with_city("Málaga")
                                         .with_zip("29007")
                                         .with_subdivision("Málaga")
                                         .with_country("ES")
                                         .with_email("jose@cliente.test");
        let mut shipment = Shipment::new(code, customer, Self::sample_company());
        shipment.delivery_address = Some(delivery);
        shipment.warehouse = Some(Warehouse { name: "Almacén central".into(), address: None });
        shipment.carrier = Some(Carrier { name: "Correos".into(), service: Some(CarrierService::new("S0132", "Paq 72")) });
        shipment.weight = Some(1.5);
        shipment.weight_uom = Some(WeightUnit::Kilogram);
        shipment.number_packages = Some(1);
        shipment
    }

    /// Crea un repositorio en memoria pre-populado con albaranes de ejemplo:
    /// uno estándar, uno contra reembolso y uno con entrega en oficina.
    pub fn sample_repo() -> InMemoryShipmentRepository {
        let repo = InMemoryShipmentRepository::new();

        let standard = Self::sample_shipment("OUT/0001");

        let mut cod = Self::sample_shipment("OUT/0002");
        cod.carrier_cashondelivery = true;
        cod.carrier_cashondelivery_price = Some(Decimal::new(4990, 2));
        cod.carrier_notes = Some("Llamar antes de entregar".into());

        let mut office = Self::sample_shipment("OUT/0003");
        office.carrier_service = Some(CarrierService::new("S0236", "Paq 48 Oficina"));
        if let Some(address) = office.delivery_address.as_mut() {
            address.correos = Some("2900700".into());
        }

        for shipment in [standard, cod, office] {
            let _ = repo.save_shipment(shipment);
        }
        repo
    }
}
