use correos_provider::SandboxPicking;
use correos_workflow::{CorreosShipper, WorkflowConfig};
use env_logger::Env;
use shipping_domain::{DomainStubs, Shipment, ShipmentRepository};
use std::error::Error;
use std::io::{self, Write};
use std::sync::Arc;

/// Pequeño menú interactivo para enviar albaranes de ejemplo contra el
/// sandbox de Correos, con la configuración leída del entorno (`.env`).
///
/// Opciones soportadas:
/// 1) Probar conexión
/// 2) Ver albaranes
/// 3) Enviar albaranes pendientes
/// 4) Reimprimir etiquetas de albaranes enviados
/// 5) Salir
fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = WorkflowConfig::from_env()?;
    let repo = Arc::new(DomainStubs::sample_repo());
    let shipper = CorreosShipper::new(config.api, SandboxPicking::new(), repo.clone(), config.context);

    loop {
        println!("\n== Correos CLI menu ==");
        println!("1) Probar conexión");
        println!("2) Ver albaranes");
        println!("3) Enviar albaranes pendientes");
        println!("4) Reimprimir etiquetas");
        println!("5) Salir");
        print!("Elige una opción: ");
        io::stdout().flush().ok();

        let mut choice = String::new();
        io::stdin().read_line(&mut choice)?;
        match choice.trim() {
            "1" => match shipper.test_correos() {
                Ok(message) => println!("{}", message),
                Err(e) => eprintln!("Error probando la conexión: {}", e),
            },
            "2" => match repo.list_shipments() {
                Ok(shipments) => {
                    println!("\nCODE       | TRACKING             | PRINTED");
                    println!("------------------------------------------");
                    for s in shipments {
                        println!("{:<10} | {:<20} | {}", s.code, s.tracking_ref().unwrap_or("-"), s.carrier_printed);
                    }
                }
                Err(e) => eprintln!("Error listando albaranes: {}", e),
            },
            "3" => {
                let pending: Vec<Shipment> = match repo.list_shipments() {
                    Ok(all) => all.into_iter().filter(|s| s.tracking_ref().is_none()).collect(),
                    Err(e) => { eprintln!("Error listando albaranes: {}", e); continue; }
                };
                match shipper.send_correos(&pending) {
                    Ok(report) => {
                        println!("Enviados: {:?}", report.references);
                        for path in &report.labels {
                            println!("Etiqueta: {}", path.display());
                        }
                        for message in report.error_messages() {
                            eprintln!("Error: {}", message);
                        }
                    }
                    Err(e) => eprintln!("Error enviando albaranes: {}", e),
                }
            }
            "4" => {
                let sent: Vec<Shipment> = match repo.list_shipments() {
                    Ok(all) => all.into_iter().filter(|s| s.tracking_ref().is_some()).collect(),
                    Err(e) => { eprintln!("Error listando albaranes: {}", e); continue; }
                };
                match shipper.print_labels_correos(&sent) {
                    Ok(labels) if labels.is_empty() => println!("No hay etiquetas disponibles"),
                    Ok(labels) => {
                        for path in labels {
                            println!("Etiqueta: {}", path.display());
                        }
                    }
                    Err(e) => eprintln!("Error reimprimiendo etiquetas: {}", e),
                }
            }
            "5" => {
                println!("Saliendo...");
                break;
            }
            other => {
                println!("Opción inválida: {}", other);
            }
        }
    }

    Ok(())
}
