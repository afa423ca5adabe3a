use flarewatch_core::bridge::protocol::{
    EFFECTS_VERTEX_FLOATS, HEADER_CME_ACTIVE, HEADER_EFFECTS_VERTEX_COUNT, HEADER_ENTITY_COUNT,
    HEADER_EVENT_COUNT, HEADER_FRAME_COUNTER, HEADER_MAX_EFFECTS_VERTICES, HEADER_MAX_ENTITIES,
    HEADER_MAX_EVENTS, HEADER_OFFSET_MINUTES, HEADER_PLAYING, HEADER_PROTOCOL_VERSION,
    PROTOCOL_VERSION,
};
use flarewatch_core::{
    ControlEvent, ControlQueue, Dashboard, DashboardConfig, EntityBuffer, EntityRecord,
    FixedTimestep, ProtocolLayout,
};

/// Drives the dashboard from the browser's animation-frame callbacks
/// and republishes its state into one flat f32 buffer each frame.
///
/// The concrete app lives in `flarewatch-core`; this type only owns the
/// loop plumbing: control queue in, fixed-timestep steps, buffer out.
pub struct Runner {
    dashboard: Dashboard,
    controls: ControlQueue,
    timestep: FixedTimestep,
    entity_buffer: EntityBuffer,
    layout: ProtocolLayout,
    /// header + entity + effects + event sections, read by TypeScript.
    buffer: Vec<f32>,
    frame_counter: f32,
}

impl Runner {
    pub fn new(config: DashboardConfig) -> Self {
        let layout = ProtocolLayout::from_config(&config);
        let mut buffer = vec![0.0; layout.buffer_total_floats];

        // Capacities are written once; TypeScript derives offsets from them.
        buffer[HEADER_MAX_ENTITIES] = layout.max_entities as f32;
        buffer[HEADER_MAX_EFFECTS_VERTICES] = layout.max_effects_vertices as f32;
        buffer[HEADER_MAX_EVENTS] = layout.max_events as f32;
        buffer[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;

        Self {
            dashboard: Dashboard::new(&config),
            controls: ControlQueue::new(),
            timestep: FixedTimestep::new(config.fixed_dt),
            entity_buffer: EntityBuffer::new(),
            layout,
            buffer,
            frame_counter: 0.0,
        }
    }

    pub fn push_control(&mut self, event: ControlEvent) {
        self.controls.push(event);
    }

    /// Run one frame: drain controls, fixed-step the simulation, derive
    /// the scene, rebuild every buffer section.
    pub fn frame(&mut self, dt: f32) {
        self.dashboard.begin_frame();

        let controls = self.controls.drain();
        self.dashboard.handle_controls(&controls);

        let steps = self.timestep.accumulate(dt);
        for _ in 0..steps {
            self.dashboard.step(self.timestep.dt());
        }

        self.dashboard.sync_scene();
        self.entity_buffer.rebuild(self.dashboard.scene.iter());
        self.dashboard.effects.rebuild_effects_buffer();

        self.frame_counter += 1.0;
        self.write_buffer();
    }

    fn write_buffer(&mut self) {
        let entity_count = (self.entity_buffer.records.len()).min(self.layout.max_entities);
        let entity_floats: &[f32] =
            bytemuck::cast_slice(&self.entity_buffer.records[..entity_count]);
        let entity_start = self.layout.entity_data_offset;
        self.buffer[entity_start..entity_start + entity_floats.len()]
            .copy_from_slice(entity_floats);

        let effects = &self.dashboard.effects.effects_buffer;
        let effects_floats = effects.len().min(self.layout.effects_data_floats);
        let effects_start = self.layout.effects_data_offset;
        self.buffer[effects_start..effects_start + effects_floats]
            .copy_from_slice(&effects[..effects_floats]);

        let event_count = self.dashboard.events.len().min(self.layout.max_events);
        let event_floats: &[f32] = bytemuck::cast_slice(&self.dashboard.events[..event_count]);
        let event_start = self.layout.event_data_offset;
        self.buffer[event_start..event_start + event_floats.len()].copy_from_slice(event_floats);

        let clock = self.dashboard.clock();
        self.buffer[HEADER_FRAME_COUNTER] = self.frame_counter;
        self.buffer[HEADER_ENTITY_COUNT] = entity_count as f32;
        self.buffer[HEADER_EFFECTS_VERTEX_COUNT] =
            (effects_floats / EFFECTS_VERTEX_FLOATS) as f32;
        self.buffer[HEADER_EVENT_COUNT] = event_count as f32;
        self.buffer[HEADER_OFFSET_MINUTES] = clock.offset_minutes() as f32;
        self.buffer[HEADER_PLAYING] = if clock.is_playing() { 1.0 } else { 0.0 };
        self.buffer[HEADER_CME_ACTIVE] = if self.dashboard.cme().is_active() { 1.0 } else { 0.0 };
    }

    // ---- Accessors for SharedArrayBuffer reads ----

    pub fn buffer_ptr(&self) -> *const f32 {
        self.buffer.as_ptr()
    }

    pub fn buffer_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }

    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    pub fn dashboard_mut(&mut self) -> &mut Dashboard {
        &mut self.dashboard
    }

    pub fn entity_record_floats(&self) -> u32 {
        EntityRecord::FLOATS as u32
    }
}
