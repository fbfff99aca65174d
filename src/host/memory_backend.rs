//! In-Memory-Referenz-Backend.
//!
//! Baut echte Vertex/Kanten/Flächen-Daten, protokolliert jeden Aufruf und
//! erlaubt gezielte Fehlerinjektion. Klone teilen sich dieselbe Szene, so
//! dass Aufrufer nach der Übergabe an das Werkzeug weiter hineinsehen können.

use super::mesh_backend::{Adjustment, ArcBuildParams, MeshBackend, MeshHandle};
use crate::core::sweep_points;
use anyhow::{anyhow, bail};
use glam::DVec3;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::rc::Rc;

/// Operationsart eines Backend-Aufrufs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BackendOp {
    SpawnGuidePoint,
    MoveGuidePoint,
    BeginAdjustment,
    BuildArc,
    ExtrudeAndScale,
    ExtrudeAlongNormal,
    DiscardTransient,
    RecalculateNormals,
}

/// Protokollierter Aufruf inkl. Argumente.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum BackendCall {
    SpawnGuidePoint { at: DVec3 },
    MoveGuidePoint { handle: MeshHandle, to: DVec3 },
    BeginAdjustment { handle: MeshHandle, adjustment: Adjustment },
    BuildArc { params: ArcBuildParams },
    ExtrudeAndScale { handle: MeshHandle },
    ExtrudeAlongNormal { handle: MeshHandle },
    DiscardTransient { handle: MeshHandle },
    RecalculateNormals { handle: MeshHandle },
}

impl BackendCall {
    pub fn op(&self) -> BackendOp {
        match self {
            BackendCall::SpawnGuidePoint { .. } => BackendOp::SpawnGuidePoint,
            BackendCall::MoveGuidePoint { .. } => BackendOp::MoveGuidePoint,
            BackendCall::BeginAdjustment { .. } => BackendOp::BeginAdjustment,
            BackendCall::BuildArc { .. } => BackendOp::BuildArc,
            BackendCall::ExtrudeAndScale { .. } => BackendOp::ExtrudeAndScale,
            BackendCall::ExtrudeAlongNormal { .. } => BackendOp::ExtrudeAlongNormal,
            BackendCall::DiscardTransient { .. } => BackendOp::DiscardTransient,
            BackendCall::RecalculateNormals { .. } => BackendOp::RecalculateNormals,
        }
    }
}

/// Feste Beträge der beiden Extrusionen (stehen für die interaktive Eingabe).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtrudeSettings {
    /// Skalierung der extrudierten Schleife um den Kreismittelpunkt
    pub scale_factor: f64,
    /// Extrusionslänge entlang der Bogennormalen
    pub normal_offset: f64,
}

impl Default for ExtrudeSettings {
    fn default() -> Self {
        Self {
            scale_factor: 0.8,
            normal_offset: 1.0,
        }
    }
}

/// Mesh-Daten eines Backend-Objekts.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MeshData {
    pub vertices: Vec<DVec3>,
    pub edges: Vec<[usize; 2]>,
    pub faces: Vec<Vec<usize>>,
    /// Gefüllt nach `recalculate_normals`, parallel zu `faces`
    pub face_normals: Vec<DVec3>,
    /// Skalierungszentrum (Kreismittelpunkt)
    pub pivot: DVec3,
    /// Bogenachse
    pub axis: DVec3,
}

impl MeshData {
    /// Vorzeichenbehaftetes Volumen (positiv bei nach außen zeigenden Flächen).
    pub fn signed_volume(&self) -> f64 {
        self.faces
            .iter()
            .map(|face| {
                let v0 = self.vertices[face[0]];
                face.windows(2)
                    .skip(1)
                    .map(|w| v0.dot(self.vertices[w[0]].cross(self.vertices[w[1]])))
                    .sum::<f64>()
            })
            .sum::<f64>()
            / 6.0
    }

    fn face_normal(&self, face: &[usize]) -> DVec3 {
        // Newell-Verfahren
        let mut normal = DVec3::ZERO;
        for (k, &i) in face.iter().enumerate() {
            let a = self.vertices[i];
            let b = self.vertices[face[(k + 1) % face.len()]];
            normal += DVec3::new(
                (a.y - b.y) * (a.z + b.z),
                (a.z - b.z) * (a.x + b.x),
                (a.x - b.x) * (a.y + b.y),
            );
        }
        normal.normalize_or_zero()
    }

    fn rebuild_edges_from_faces(&mut self) {
        let mut seen = std::collections::BTreeSet::new();
        for face in &self.faces {
            for (k, &a) in face.iter().enumerate() {
                let b = face[(k + 1) % face.len()];
                seen.insert([a.min(b), a.max(b)]);
            }
        }
        self.edges = seen.into_iter().collect();
    }
}

#[derive(Default)]
struct MemoryScene {
    next_id: u64,
    guide_points: BTreeMap<MeshHandle, DVec3>,
    meshes: BTreeMap<MeshHandle, MeshData>,
    calls: Vec<BackendCall>,
    pending_failures: Vec<BackendOp>,
}

impl MemoryScene {
    fn next_handle(&mut self) -> MeshHandle {
        self.next_id += 1;
        MeshHandle(self.next_id)
    }
}

/// Referenz-Implementierung von [`MeshBackend`] im Speicher.
#[derive(Clone, Default)]
pub struct MemoryMeshBackend {
    scene: Rc<RefCell<MemoryScene>>,
    settings: ExtrudeSettings,
}

impl MemoryMeshBackend {
    /// Erstellt ein leeres Backend mit Standard-Extrusionswerten.
    pub fn new() -> Self {
        Self::default()
    }

    /// Erstellt ein leeres Backend mit eigenen Extrusionswerten.
    pub fn with_settings(settings: ExtrudeSettings) -> Self {
        Self {
            scene: Rc::default(),
            settings,
        }
    }

    /// Lässt den nächsten Aufruf der Operation `op` fehlschlagen.
    pub fn fail_next(&self, op: BackendOp) {
        self.scene.borrow_mut().pending_failures.push(op);
    }

    /// Alle bisherigen Aufrufe in Reihenfolge (auch fehlgeschlagene).
    pub fn calls(&self) -> Vec<BackendCall> {
        self.scene.borrow().calls.clone()
    }

    /// Anzahl bisheriger Aufrufe der Operation `op`.
    pub fn call_count(&self, op: BackendOp) -> usize {
        self.scene
            .borrow()
            .calls
            .iter()
            .filter(|c| c.op() == op)
            .count()
    }

    pub fn guide_points(&self) -> Vec<(MeshHandle, DVec3)> {
        self.scene
            .borrow()
            .guide_points
            .iter()
            .map(|(h, p)| (*h, *p))
            .collect()
    }

    pub fn mesh(&self, handle: MeshHandle) -> Option<MeshData> {
        self.scene.borrow().meshes.get(&handle).cloned()
    }

    pub fn meshes(&self) -> Vec<(MeshHandle, MeshData)> {
        self.scene
            .borrow()
            .meshes
            .iter()
            .map(|(h, m)| (*h, m.clone()))
            .collect()
    }

    /// Protokolliert den Aufruf und löst ggf. eine injizierte Störung aus.
    fn begin(&self, call: BackendCall) -> anyhow::Result<()> {
        let op = call.op();
        let mut scene = self.scene.borrow_mut();
        scene.calls.push(call);
        if let Some(pos) = scene.pending_failures.iter().position(|p| *p == op) {
            scene.pending_failures.remove(pos);
            bail!("Backend hat {:?} abgelehnt", op);
        }
        Ok(())
    }

    fn with_mesh<T>(
        &self,
        handle: MeshHandle,
        f: impl FnOnce(&MeshData) -> anyhow::Result<T>,
    ) -> anyhow::Result<T> {
        let scene = self.scene.borrow();
        let mesh = scene
            .meshes
            .get(&handle)
            .ok_or_else(|| anyhow!("unbekanntes Mesh {:?}", handle))?;
        f(mesh)
    }

    /// Ersetzt das Mesh unter `old` durch `mesh` unter einem neuen Handle.
    fn replace_mesh(&self, old: MeshHandle, mesh: MeshData) -> MeshHandle {
        let mut scene = self.scene.borrow_mut();
        scene.meshes.remove(&old);
        let handle = scene.next_handle();
        scene.meshes.insert(handle, mesh);
        handle
    }
}

impl MeshBackend for MemoryMeshBackend {
    fn spawn_guide_point(&mut self, at: DVec3) -> anyhow::Result<MeshHandle> {
        self.begin(BackendCall::SpawnGuidePoint { at })?;
        let mut scene = self.scene.borrow_mut();
        let handle = scene.next_handle();
        scene.guide_points.insert(handle, at);
        Ok(handle)
    }

    fn move_guide_point(&mut self, handle: MeshHandle, to: DVec3) -> anyhow::Result<()> {
        self.begin(BackendCall::MoveGuidePoint { handle, to })?;
        let mut scene = self.scene.borrow_mut();
        let point = scene
            .guide_points
            .get_mut(&handle)
            .ok_or_else(|| anyhow!("unbekannter Hilfspunkt {:?}", handle))?;
        *point = to;
        Ok(())
    }

    fn begin_adjustment(
        &mut self,
        handle: MeshHandle,
        adjustment: Adjustment,
    ) -> anyhow::Result<()> {
        self.begin(BackendCall::BeginAdjustment { handle, adjustment })?;
        let scene = self.scene.borrow();
        let known = match adjustment {
            Adjustment::GrabGuidePoint => scene.guide_points.contains_key(&handle),
            Adjustment::ScaleExtrude | Adjustment::NormalExtrude => {
                scene.meshes.contains_key(&handle)
            }
        };
        if !known {
            bail!("{:?} für unbekanntes Objekt {:?}", adjustment, handle);
        }
        Ok(())
    }

    fn build_arc(&mut self, params: &ArcBuildParams) -> anyhow::Result<MeshHandle> {
        self.begin(BackendCall::BuildArc { params: *params })?;
        if params.segments == 0 {
            bail!("Bogen ohne Segmente");
        }
        if !params.angular_span.is_finite() || params.angular_span <= 0.0 {
            bail!("ungültige Winkelspanne {}", params.angular_span);
        }

        let vertices = sweep_points(
            params.endpoints,
            params.center,
            params.axis,
            params.angular_span,
            params.segments,
        );
        let edges = (0..vertices.len() - 1).map(|i| [i, i + 1]).collect();
        let mesh = MeshData {
            vertices,
            edges,
            pivot: params.center,
            axis: params.axis,
            ..MeshData::default()
        };

        let mut scene = self.scene.borrow_mut();
        let handle = scene.next_handle();
        scene.meshes.insert(handle, mesh);
        Ok(handle)
    }

    fn extrude_and_scale(&mut self, handle: MeshHandle) -> anyhow::Result<MeshHandle> {
        self.begin(BackendCall::ExtrudeAndScale { handle })?;
        let factor = self.settings.scale_factor;
        let extruded = self.with_mesh(handle, |mesh| {
            if !mesh.faces.is_empty() {
                bail!("Extrudieren+Skalieren erwartet eine Kantenschleife");
            }
            let n = mesh.vertices.len();
            let mut out = mesh.clone();
            out.vertices.extend(
                mesh.vertices
                    .iter()
                    .map(|v| mesh.pivot + (*v - mesh.pivot) * factor),
            );
            out.faces = mesh
                .edges
                .iter()
                .map(|&[a, b]| vec![a, b, n + b, n + a])
                .collect();
            out.rebuild_edges_from_faces();
            Ok(out)
        })?;
        Ok(self.replace_mesh(handle, extruded))
    }

    fn extrude_along_normal(&mut self, handle: MeshHandle) -> anyhow::Result<MeshHandle> {
        self.begin(BackendCall::ExtrudeAlongNormal { handle })?;
        let offset = self.settings.normal_offset;
        let extruded = self.with_mesh(handle, |mesh| {
            if mesh.faces.is_empty() {
                bail!("Extrusion entlang der Normalen erwartet Flächen");
            }
            let n = mesh.vertices.len();
            let shift = mesh.axis * offset;
            let mut out = mesh.clone();
            out.vertices.extend(mesh.vertices.iter().map(|v| *v + shift));
            out.faces
                .extend(mesh.faces.iter().map(|f| f.iter().map(|i| i + n).collect()));
            out.faces.extend(
                boundary_edges(&mesh.faces)
                    .into_iter()
                    .map(|[a, b]| vec![a, b, n + b, n + a]),
            );
            out.face_normals.clear();
            out.rebuild_edges_from_faces();
            Ok(out)
        })?;
        Ok(self.replace_mesh(handle, extruded))
    }

    fn discard_transient(&mut self, handle: MeshHandle) -> anyhow::Result<()> {
        self.begin(BackendCall::DiscardTransient { handle })?;
        let mut scene = self.scene.borrow_mut();
        if scene.guide_points.remove(&handle).is_some() || scene.meshes.remove(&handle).is_some()
        {
            Ok(())
        } else {
            bail!("unbekanntes transientes Objekt {:?}", handle)
        }
    }

    fn recalculate_normals(&mut self, handle: MeshHandle) -> anyhow::Result<()> {
        self.begin(BackendCall::RecalculateNormals { handle })?;
        let mut scene = self.scene.borrow_mut();
        let mesh = scene
            .meshes
            .get_mut(&handle)
            .ok_or_else(|| anyhow!("unbekanntes Mesh {:?}", handle))?;

        orient_consistently(&mut mesh.faces);
        if mesh.signed_volume() < 0.0 {
            for face in &mut mesh.faces {
                face.reverse();
            }
        }
        mesh.face_normals = mesh.faces.iter().map(|f| mesh.face_normal(f)).collect();
        Ok(())
    }
}

/// Gerichtete Kanten, die nur zu einer Fläche gehören.
fn boundary_edges(faces: &[Vec<usize>]) -> Vec<[usize; 2]> {
    let mut counts: BTreeMap<[usize; 2], (usize, [usize; 2])> = BTreeMap::new();
    for face in faces {
        for (k, &a) in face.iter().enumerate() {
            let b = face[(k + 1) % face.len()];
            counts
                .entry([a.min(b), a.max(b)])
                .and_modify(|(count, _)| *count += 1)
                .or_insert((1, [a, b]));
        }
    }
    counts
        .into_values()
        .filter(|(count, _)| *count == 1)
        .map(|(_, edge)| edge)
        .collect()
}

/// Dreht Flächen so, dass Nachbarn gemeinsame Kanten gegenläufig durchlaufen.
fn orient_consistently(faces: &mut [Vec<usize>]) {
    let mut by_edge: HashMap<[usize; 2], Vec<usize>> = HashMap::new();
    for (fi, face) in faces.iter().enumerate() {
        for (k, &a) in face.iter().enumerate() {
            let b = face[(k + 1) % face.len()];
            by_edge.entry([a.min(b), a.max(b)]).or_default().push(fi);
        }
    }

    let mut visited = vec![false; faces.len()];
    for seed in 0..faces.len() {
        if visited[seed] {
            continue;
        }
        visited[seed] = true;
        let mut queue = VecDeque::from([seed]);
        while let Some(fi) = queue.pop_front() {
            let face = faces[fi].clone();
            for (k, &a) in face.iter().enumerate() {
                let b = face[(k + 1) % face.len()];
                let Some(neighbors) = by_edge.get(&[a.min(b), a.max(b)]) else {
                    continue;
                };
                for &gi in neighbors {
                    if gi == fi || visited[gi] {
                        continue;
                    }
                    if has_directed_edge(&faces[gi], a, b) {
                        faces[gi].reverse();
                    }
                    visited[gi] = true;
                    queue.push_back(gi);
                }
            }
        }
    }
}

fn has_directed_edge(face: &[usize], a: usize, b: usize) -> bool {
    face.iter()
        .enumerate()
        .any(|(k, &v)| v == a && face[(k + 1) % face.len()] == b)
}
